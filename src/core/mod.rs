//! Módulo core - Lógica central do gerador

pub mod config;
pub mod params;
pub mod template;
