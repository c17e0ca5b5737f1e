use alloc::string::String;

// -----------------------------------------------------------------------------
// Text

impl_typed!(String => string, to_string, must_string, string_vec, to_string_vec, string_map, to_string_map);

// -----------------------------------------------------------------------------
// Signed integers

impl_typed!(i8 => i8, to_i8, must_i8, i8_vec, to_i8_vec, i8_map, to_i8_map);
impl_typed!(i16 => i16, to_i16, must_i16, i16_vec, to_i16_vec, i16_map, to_i16_map);
impl_typed!(i32 => i32, to_i32, must_i32, i32_vec, to_i32_vec, i32_map, to_i32_map);
impl_typed!(i64 => i64, to_i64, must_i64, i64_vec, to_i64_vec, i64_map, to_i64_map);
impl_typed!(i128 => i128, to_i128, must_i128, i128_vec, to_i128_vec, i128_map, to_i128_map);
impl_typed!(isize => isize, to_isize, must_isize, isize_vec, to_isize_vec, isize_map, to_isize_map);

// -----------------------------------------------------------------------------
// Unsigned integers

impl_typed!(u8 => u8, to_u8, must_u8, u8_vec, to_u8_vec, u8_map, to_u8_map);
impl_typed!(u16 => u16, to_u16, must_u16, u16_vec, to_u16_vec, u16_map, to_u16_map);
impl_typed!(u32 => u32, to_u32, must_u32, u32_vec, to_u32_vec, u32_map, to_u32_map);
impl_typed!(u64 => u64, to_u64, must_u64, u64_vec, to_u64_vec, u64_map, to_u64_map);
impl_typed!(u128 => u128, to_u128, must_u128, u128_vec, to_u128_vec, u128_map, to_u128_map);
impl_typed!(usize => usize, to_usize, must_usize, usize_vec, to_usize_vec, usize_map, to_usize_map);

// Raw bytes read better under their own name.
impl_typed!(u8 => byte, to_byte, must_byte, byte_vec, to_byte_vec, byte_map, to_byte_map);

// -----------------------------------------------------------------------------
// Floats

impl_typed!(f32 => f32, to_f32, must_f32, f32_vec, to_f32_vec, f32_map, to_f32_map);
impl_typed!(f64 => f64, to_f64, must_f64, f64_vec, to_f64_vec, f64_map, to_f64_map);

// -----------------------------------------------------------------------------
// Others

impl_typed!(bool => bool, to_bool, must_bool, bool_vec, to_bool_vec, bool_map, to_bool_map);
impl_typed!(char => char, to_char, must_char, char_vec, to_char_vec, char_map, to_char_map);

// -----------------------------------------------------------------------------
// Tests
