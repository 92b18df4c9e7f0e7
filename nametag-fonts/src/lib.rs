//! Font definition files bundled for the [`nametag`](https://crates.io/crates/nametag) crate.

macro_rules! fonts {
    ($($name:ident => $file_name:expr,)*) => {

        /// Included fonts
        #[derive(Debug, Clone, Copy)]
        #[non_exhaustive]
        pub enum FontFile {
            $(
                #[doc = concat!("Font `", $file_name, ".txt`")]
                $name,
            )*
        }

        impl FontFile {
            /// An array containing all the variants
            pub const ALL: [Self; const{0 $(+ {_ = $file_name; 1} )*}] = [$(Self::$name),*];

            /// The contents of a font file
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$name => include_str!(concat!("../fonts/", $file_name, ".txt")),)*
                }
            }

            /// The file stem
            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Self::$name => $file_name,)*
                }
            }
        }

    };
}

fonts! {
    Roman => "roman",
    Medium => "medium",
}

#[cfg(test)]
mod tests {
    use super::FontFile;

    #[test]
    fn files_are_not_empty() {
        for font in FontFile::ALL {
            assert!(!font.as_str().is_empty(), "{} is empty", font.name());
        }
    }
}
