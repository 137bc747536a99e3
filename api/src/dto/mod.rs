//! Request and response DTOs.

pub mod auth_dto;

pub use auth_dto::{
    AuthResponseDto, LoginRequest, LogoutRequest, RefreshTokenRequest, RegisterRequest, UserDto,
};
