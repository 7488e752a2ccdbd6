pub use {const_panic, konst};

macro_rules! define_env_with_default_macro {
    ($macro_name:ident, $parse_fn_name:ident, $output_type_name:literal) => {
        /// Reads a decimal integer from a build-time environment variable, or falls back to
        /// the given default when the variable is unset.
        ///
        /// Usable in `const` context. An unparsable value fails the build.
        #[macro_export]
        macro_rules! $macro_name {
            ($env_var:literal, $default:expr) => {
                if let Some(str_value) = option_env!($env_var) {
                    if let Ok(value) = $crate::env::konst::primitive::$parse_fn_name(str_value) {
                        value
                    } else {
                        $crate::env::const_panic::concat_panic!(
                            "Could not parse environment variable `",
                            $env_var,
                            "=",
                            str_value,
                            "` as ",
                            $output_type_name,
                        );
                    }
                } else {
                    $default
                }
            };
        }
    };
}

define_env_with_default_macro!(u8_from_env_or, parse_u8, "a u8");
define_env_with_default_macro!(u16_from_env_or, parse_u16, "a u16");
define_env_with_default_macro!(u32_from_env_or, parse_u32, "a u32");

#[cfg(test)]
mod tests {
    const UNSET_U8: u8 = u8_from_env_or!("PORTBLINK_TEST_UNSET_U8", 0xAA);
    const UNSET_U16: u16 = u16_from_env_or!("PORTBLINK_TEST_UNSET_U16", 0x23);
    const UNSET_U32: u32 = u32_from_env_or!("PORTBLINK_TEST_UNSET_U32", 1000);

    #[test]
    fn unset_variables_use_default() {
        assert_eq!(UNSET_U8, 0xAA);
        assert_eq!(UNSET_U16, 0x23);
        assert_eq!(UNSET_U32, 1000);
    }

    #[test]
    fn parses_decimal() {
        assert!(matches!(konst::primitive::parse_u16("41"), Ok(41)));
        assert!(konst::primitive::parse_u8("256").is_err());
        assert!(konst::primitive::parse_u8("0xAA").is_err());
    }
}
