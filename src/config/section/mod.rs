//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module   | TOML Section            | Purpose                          |
//! |----------|-------------------------|----------------------------------|
//! | `site`   | `[site]`                | Base URL and language            |
//! | `person` | `[person]`              | Author identity                  |
//! | `page`   | `[home]`, `[about]`     | Per-page path, title, description|
//! | `routes` | `[routes]`              | Enabled site sections            |
//! | `build`  | `[build]`               | Output directory                 |
//! | `serve`  | `[serve]`               | Preview server                   |

mod build;
mod page;
mod person;
mod routes;
mod serve;
mod site;

pub use build::BuildConfig;
pub use page::{HomeConfig, PageConfig};
pub use person::PersonConfig;
pub use routes::{Route, RouteTable};
pub use serve::ServeConfig;
pub use site::SiteInfoConfig;
