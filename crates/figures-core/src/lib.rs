//! Figures Core Types and Definitions
//!
//! This crate provides a small model of 2D figures that report a color,
//! describe themselves as text and can be translated. It includes:
//!
//! - **Colors**: Named colors with a "no color" sentinel ([`color::Color`])
//! - **Geometry**: Integer translation offsets ([`geometry::Offset`])
//! - **Draw**: Text output collected from shapes ([`draw::Drawing`])
//! - **Shapes**: The [`shape::Shape`] trait and its implementations
//! - **Scene**: The driver that runs shapes through draw/move/draw ([`scene::Scene`])
//! - **Config**: Deserializable settings for the driver ([`config::AppConfig`])

pub mod color;
pub mod config;
pub mod draw;
pub mod geometry;
pub mod scene;
pub mod shape;
