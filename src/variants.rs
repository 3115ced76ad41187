/// A type with a fixed, finite set of named variants
///
/// Implemented for fieldless enums to pair them up by name with
/// [BiMap::from_paired_enums](crate::BiMap::from_paired_enums). The [named_variants](crate::named_variants)
/// macro derives it while declaring the enum.
pub trait NamedVariants: Sized + 'static {
    /// Every variant, in declaration order.
    fn variants() -> &'static [Self];

    /// The variant's name as written in its declaration.
    fn name(&self) -> &'static str;
}

/// Declares a fieldless enum and implements [NamedVariants] for it.
///
/// ```
/// use lexica_rs::{named_variants, BiMap, NamedVariants};
///
/// named_variants! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
///     pub enum Colour { Red, Green }
/// }
///
/// assert_eq!(Colour::variants(), &[Colour::Red, Colour::Green]);
/// assert_eq!(Colour::Green.name(), "Green");
/// ```
#[macro_export]
macro_rules! named_variants {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $($variant),*
        }

        impl $crate::NamedVariants for $name {
            fn variants() -> &'static [Self] {
                &[$($name::$variant),*]
            }

            fn name(&self) -> &'static str {
                match *self {
                    $($name::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod test {
    use super::NamedVariants;

    crate::named_variants! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        enum Planet {
            Mercury,
            Venus,
            Earth,
        }
    }

    crate::named_variants! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        enum Nothing {}
    }

    #[test]
    fn lists_variants_in_declaration_order() {
        assert_eq!(
            Planet::variants(),
            &[Planet::Mercury, Planet::Venus, Planet::Earth]
        );
    }

    #[test]
    fn names_match_declaration() {
        let names: Vec<_> = Planet::variants().iter().map(Planet::name).collect();
        assert_eq!(names, vec!["Mercury", "Venus", "Earth"]);
    }

    #[test]
    fn empty_enum_has_no_variants() {
        assert!(Nothing::variants().is_empty());
    }
}
