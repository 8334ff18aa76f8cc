//! UI module for the fistula awareness application
//! Light-first aesthetic with pink accents, dark mode included
//!
//! Layered bottom-up: `primitives` draw on canvas, `widgets` are
//! message-generic building blocks, `components` know the app `Message`,
//! and `pages` assemble one full view per navigable page.

pub mod animation;
pub mod components;
pub mod icons;
pub mod pages;
pub mod primitives;
pub mod theme;
pub mod widgets;
