//! Runtime tagged-union values for Rust.
//!
//! A tagged union is declared once, either dynamically from a label set or
//! statically with the [`tagged_union!`] macro, and the resulting
//! [`TaggedUnion`] bundle provides one constructor per label,
//! discrimination predicates (`is` / `is_not`), and exhaustive or partial
//! dispatch over the closed label set. Variant values are flat field
//! mappings with a single reserved tag field and are immutable after
//! construction.
//!
//! ```
//! use tagged_union::{record, Cases, TaggedUnion};
//!
//! let shape = TaggedUnion::new(["circle", "rect"]);
//! let circle = shape.construct("circle", record! { "radius" => 3 })?;
//!
//! assert!(shape.is("circle", &circle));
//! assert_eq!(circle.to_string(), r#"{"tag":"circle","radius":3}"#);
//!
//! let perimeter = shape.match_on(
//!     &circle,
//!     Cases::new()
//!         .on("circle", |v| {
//!             2.0 * std::f64::consts::PI * v.get("radius").and_then(|r| r.as_f64()).unwrap_or(0.0)
//!         })
//!         .otherwise(|_| 0.0),
//! )?;
//! assert!(perimeter > 18.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod dispatch;
pub mod error;
pub mod union;
pub mod value;
pub mod variant;

mod macros;

pub use crate::dispatch::Cases;
pub use crate::error::{ConstructError, MatchError, UnionError, ValueError};
pub use crate::union::{Constructor, TaggedUnion, UnionDef, DEFAULT_TAG_KEY};
pub use crate::value::{Record, Value};
pub use crate::variant::Variant;
