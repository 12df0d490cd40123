//! Page controller state.
//!
//! DESIGN
//! ======
//! State is split by concern (`nav`, `reveal`, `theme`) and kept free of DOM
//! calls, so each decision can be tested on the native target. Browser
//! effects live in `util`.

pub mod nav;
pub mod reveal;
pub mod theme;
