// Declaration macros - the static front door of the crate

/// Payload literal.
///
/// ```
/// use tagged_union::{record, Value};
///
/// let payload = record! { "radius" => 3 };
/// assert_eq!(payload.get("radius"), Some(&Value::Int(3)));
/// ```
#[macro_export]
macro_rules! record {
    () => { $crate::Record::new() };
    ( $( $field:expr => $value:expr ),+ $(,)? ) => {{
        let mut record = $crate::Record::new();
        $(
            record.insert(
                ::std::string::String::from($field),
                $crate::Value::from($value),
            );
        )+
        record
    }};
}

/// Declare a tagged-union schema in one place: the label set, each
/// label's payload shape, and optionally a custom tag key.
///
/// The declaration produces a marker type implementing [`UnionDef`], one
/// typed constructor function per label (labels with an empty payload
/// shape take no arguments), and a `union()` factory returning the
/// runtime operation bundle.
///
/// ```
/// use tagged_union::{tagged_union, Cases, Variant};
///
/// tagged_union! {
///     /// Something drawable.
///     pub union Shape {
///         circle { radius: f64 },
///         rect { width: f64, height: f64 },
///     }
/// }
///
/// tagged_union! {
///     pub union Response, tag = "status" {
///         Success { payload: String },
///         Failure { message: String },
///     }
/// }
///
/// let shape = Shape::union();
/// let circle = Shape::circle(3.0);
/// assert!(shape.is("circle", &circle));
///
/// let area = shape
///     .match_on(
///         &circle,
///         Cases::new()
///             .on("circle", |v: &Variant| {
///                 let r = v.get("radius").and_then(|v| v.as_f64()).unwrap_or(0.0);
///                 r * r * std::f64::consts::PI
///             })
///             .on("rect", |v: &Variant| {
///                 let w = v.get("width").and_then(|v| v.as_f64()).unwrap_or(0.0);
///                 let h = v.get("height").and_then(|v| v.as_f64()).unwrap_or(0.0);
///                 w * h
///             }),
///     )
///     .unwrap();
/// assert!((area - 9.0 * std::f64::consts::PI).abs() < 1e-9);
/// ```
///
/// [`UnionDef`]: crate::UnionDef
#[macro_export]
macro_rules! tagged_union {
    (@tag) => { $crate::DEFAULT_TAG_KEY };
    (@tag $tag:literal) => { $tag };
    (
        $(#[$meta:meta])*
        $vis:vis union $name:ident $(, tag = $tag:literal)? {
            $(
                $(#[$label_meta:meta])*
                $label:ident { $( $field:ident : $field_ty:ty ),* $(,)? }
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name;

        impl $crate::UnionDef for $name {
            const TAG_KEY: &'static str = $crate::tagged_union!(@tag $($tag)?);
            const LABELS: &'static [&'static str] = &[ $( stringify!($label) ),* ];
        }

        impl $name {
            /// Build the runtime operation bundle for this definition.
            $vis fn union() -> $crate::TaggedUnion {
                $crate::TaggedUnion::of::<Self>()
            }

            $(
                $(#[$label_meta])*
                #[allow(non_snake_case)]
                $vis fn $label( $( $field : $field_ty ),* ) -> $crate::Variant {
                    #[allow(unused_mut)]
                    let mut payload = $crate::Record::new();
                    $(
                        payload.insert(
                            ::std::string::String::from(stringify!($field)),
                            $crate::Value::from($field),
                        );
                    )*
                    $crate::Variant::new(
                        <Self as $crate::UnionDef>::TAG_KEY,
                        stringify!($label),
                        payload,
                    )
                }
            )*
        }
    };
}
