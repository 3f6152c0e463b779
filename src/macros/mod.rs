/// Implements `From<$int>` for `InputValue` for every listed integer type,
/// converting the number to its decimal form without going through `format!`.
///
/// ```ignore
/// impl_input_value_from_int!(u8, u16, u32);
/// ```
macro_rules! impl_input_value_from_int {
    ($($int:ty),+ $(,)?) => {
        $(
            impl From<$int> for InputValue<'_> {
                fn from(value: $int) -> Self {
                    let mut buf = itoa::Buffer::new();
                    InputValue::Number(buf.format(value).to_owned())
                }
            }
        )+
    };
}

pub(crate) use impl_input_value_from_int;
