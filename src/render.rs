//! Pure content-to-markup mapping. Nothing in here touches a host.

pub mod decor;
pub mod icons;
pub mod markup;
pub mod sections;
