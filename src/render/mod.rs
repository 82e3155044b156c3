//! HTML rendering of the portfolio page.
//!
//! The page is a tree of minijinja templates: `page` includes `nav`, `menu`
//! (only while the mobile menu is open), `hero`, `projects`, `experience`,
//! `contact` and `footer`. All of them ship embedded in the crate; see
//! [`templates`] for how a directory can override them.
//!
//! Besides the minijinja builtins, templates get these filters:
//!
//! | Filter | Output |
//! |--------|--------|
//! | `badge_variant` | `default` for `production`, otherwise `secondary` |
//! | `anchor` | `#` + section id |
//! | `css` | marks a crate-built inline style as safe |

mod context;
mod filters;
mod renderer;
pub mod templates;

pub use context::{PageContext, ParticleView};
pub use filters::badge_variant;
pub use renderer::Renderer;
