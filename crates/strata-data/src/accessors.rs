//! Typed accessor family shared by every container
//!
//! The invoking type provides `fn get_raw(&self, <key args>) -> Value`; the
//! macro expands the `get_as_nullable_X` / `get_as_X` /
//! `get_as_X_with_default` methods on top of it.

macro_rules! typed_accessors {
    ($($key:ident : $key_ty:ty),*) => {
        /// Read as a string, or `None` when absent
        #[must_use]
        pub fn get_as_nullable_string(&self, $($key: $key_ty),*) -> Option<String> {
            ::strata_convert::StringConverter::to_nullable_string(&self.get_raw($($key),*))
        }

        /// Read as a string, or an empty string
        #[must_use]
        pub fn get_as_string(&self, $($key: $key_ty),*) -> String {
            ::strata_convert::StringConverter::to_string(&self.get_raw($($key),*))
        }

        /// Read as a string, or `default`
        #[must_use]
        pub fn get_as_string_with_default(&self, $($key: $key_ty,)* default: &str) -> String {
            ::strata_convert::StringConverter::to_string_with_default(&self.get_raw($($key),*), default)
        }

        /// Read as a boolean, or `None` when not convertible
        #[must_use]
        pub fn get_as_nullable_boolean(&self, $($key: $key_ty),*) -> Option<bool> {
            ::strata_convert::BooleanConverter::to_nullable_boolean(&self.get_raw($($key),*))
        }

        /// Read as a boolean, or `false`
        #[must_use]
        pub fn get_as_boolean(&self, $($key: $key_ty),*) -> bool {
            ::strata_convert::BooleanConverter::to_boolean(&self.get_raw($($key),*))
        }

        /// Read as a boolean, or `default`
        #[must_use]
        pub fn get_as_boolean_with_default(&self, $($key: $key_ty,)* default: bool) -> bool {
            ::strata_convert::BooleanConverter::to_boolean_with_default(&self.get_raw($($key),*), default)
        }

        /// Read as a 32-bit integer, or `None` when not convertible
        #[must_use]
        pub fn get_as_nullable_integer(&self, $($key: $key_ty),*) -> Option<i32> {
            ::strata_convert::IntegerConverter::to_nullable_integer(&self.get_raw($($key),*))
        }

        /// Read as a 32-bit integer, or `0`
        #[must_use]
        pub fn get_as_integer(&self, $($key: $key_ty),*) -> i32 {
            ::strata_convert::IntegerConverter::to_integer(&self.get_raw($($key),*))
        }

        /// Read as a 32-bit integer, or `default`
        #[must_use]
        pub fn get_as_integer_with_default(&self, $($key: $key_ty,)* default: i32) -> i32 {
            ::strata_convert::IntegerConverter::to_integer_with_default(&self.get_raw($($key),*), default)
        }

        /// Read as a 64-bit integer, or `None` when not convertible
        #[must_use]
        pub fn get_as_nullable_long(&self, $($key: $key_ty),*) -> Option<i64> {
            ::strata_convert::LongConverter::to_nullable_long(&self.get_raw($($key),*))
        }

        /// Read as a 64-bit integer, or `0`
        #[must_use]
        pub fn get_as_long(&self, $($key: $key_ty),*) -> i64 {
            ::strata_convert::LongConverter::to_long(&self.get_raw($($key),*))
        }

        /// Read as a 64-bit integer, or `default`
        #[must_use]
        pub fn get_as_long_with_default(&self, $($key: $key_ty,)* default: i64) -> i64 {
            ::strata_convert::LongConverter::to_long_with_default(&self.get_raw($($key),*), default)
        }

        /// Read as a 32-bit float, or `None` when not convertible
        #[must_use]
        pub fn get_as_nullable_float(&self, $($key: $key_ty),*) -> Option<f32> {
            ::strata_convert::FloatConverter::to_nullable_float(&self.get_raw($($key),*))
        }

        /// Read as a 32-bit float, or `0.0`
        #[must_use]
        pub fn get_as_float(&self, $($key: $key_ty),*) -> f32 {
            ::strata_convert::FloatConverter::to_float(&self.get_raw($($key),*))
        }

        /// Read as a 32-bit float, or `default`
        #[must_use]
        pub fn get_as_float_with_default(&self, $($key: $key_ty,)* default: f32) -> f32 {
            ::strata_convert::FloatConverter::to_float_with_default(&self.get_raw($($key),*), default)
        }

        /// Read as a 64-bit float, or `None` when not convertible
        #[must_use]
        pub fn get_as_nullable_double(&self, $($key: $key_ty),*) -> Option<f64> {
            ::strata_convert::DoubleConverter::to_nullable_double(&self.get_raw($($key),*))
        }

        /// Read as a 64-bit float, or `0.0`
        #[must_use]
        pub fn get_as_double(&self, $($key: $key_ty),*) -> f64 {
            ::strata_convert::DoubleConverter::to_double(&self.get_raw($($key),*))
        }

        /// Read as a 64-bit float, or `default`
        #[must_use]
        pub fn get_as_double_with_default(&self, $($key: $key_ty,)* default: f64) -> f64 {
            ::strata_convert::DoubleConverter::to_double_with_default(&self.get_raw($($key),*), default)
        }

        /// Read as a UTC instant, or `None` when not convertible
        #[must_use]
        pub fn get_as_nullable_datetime(&self, $($key: $key_ty),*) -> Option<::chrono::DateTime<::chrono::Utc>> {
            ::strata_convert::DateTimeConverter::to_nullable_datetime(&self.get_raw($($key),*))
        }

        /// Read as a UTC instant, or the current time
        #[must_use]
        pub fn get_as_datetime(&self, $($key: $key_ty),*) -> ::chrono::DateTime<::chrono::Utc> {
            ::strata_convert::DateTimeConverter::to_datetime(&self.get_raw($($key),*))
        }

        /// Read as a UTC instant, or `default`
        #[must_use]
        pub fn get_as_datetime_with_default(
            &self,
            $($key: $key_ty,)*
            default: ::chrono::DateTime<::chrono::Utc>,
        ) -> ::chrono::DateTime<::chrono::Utc> {
            ::strata_convert::DateTimeConverter::to_datetime_with_default(&self.get_raw($($key),*), default)
        }

        /// Read as a duration, or `None` when not convertible
        #[must_use]
        pub fn get_as_nullable_duration(&self, $($key: $key_ty),*) -> Option<::chrono::TimeDelta> {
            ::strata_convert::DurationConverter::to_nullable_duration(&self.get_raw($($key),*))
        }

        /// Read as a duration, or zero
        #[must_use]
        pub fn get_as_duration(&self, $($key: $key_ty),*) -> ::chrono::TimeDelta {
            ::strata_convert::DurationConverter::to_duration(&self.get_raw($($key),*))
        }

        /// Read as a duration, or `default`
        #[must_use]
        pub fn get_as_duration_with_default(
            &self,
            $($key: $key_ty,)*
            default: ::chrono::TimeDelta,
        ) -> ::chrono::TimeDelta {
            ::strata_convert::DurationConverter::to_duration_with_default(&self.get_raw($($key),*), default)
        }

        /// Read converted to `type_code`, or `None` when not convertible
        #[must_use]
        pub fn get_as_nullable_type(
            &self,
            type_code: ::strata_convert::TypeCode,
            $($key: $key_ty),*
        ) -> Option<::strata_convert::Value> {
            ::strata_convert::TypeConverter::to_nullable_type(type_code, &self.get_raw($($key),*))
        }

        /// Read converted to `type_code`, or that type's zero value
        #[must_use]
        pub fn get_as_type(
            &self,
            type_code: ::strata_convert::TypeCode,
            $($key: $key_ty),*
        ) -> ::strata_convert::Value {
            ::strata_convert::TypeConverter::to_type(type_code, &self.get_raw($($key),*))
        }

        /// Read converted to `type_code`, or `default`
        #[must_use]
        pub fn get_as_type_with_default(
            &self,
            type_code: ::strata_convert::TypeCode,
            $($key: $key_ty,)*
            default: ::strata_convert::Value,
        ) -> ::strata_convert::Value {
            ::strata_convert::TypeConverter::to_type_with_default(type_code, &self.get_raw($($key),*), default)
        }

        /// Read as an array, or `None` when absent
        #[must_use]
        pub fn get_as_nullable_array(&self, $($key: $key_ty),*) -> Option<$crate::AnyValueArray> {
            ::strata_convert::ArrayConverter::to_nullable_array(&self.get_raw($($key),*))
                .map($crate::AnyValueArray::from_values)
        }

        /// Read as an array, or an empty one
        #[must_use]
        pub fn get_as_array(&self, $($key: $key_ty),*) -> $crate::AnyValueArray {
            self.get_as_nullable_array($($key),*).unwrap_or_default()
        }

        /// Read as an array, or `default`
        #[must_use]
        pub fn get_as_array_with_default(
            &self,
            $($key: $key_ty,)*
            default: $crate::AnyValueArray,
        ) -> $crate::AnyValueArray {
            self.get_as_nullable_array($($key),*).unwrap_or(default)
        }

        /// Read as a map, or `None` when not convertible
        #[must_use]
        pub fn get_as_nullable_map(&self, $($key: $key_ty),*) -> Option<$crate::AnyValueMap> {
            ::strata_convert::MapConverter::to_nullable_map(&self.get_raw($($key),*))
                .map($crate::AnyValueMap::from)
        }

        /// Read as a map, or an empty one
        #[must_use]
        pub fn get_as_map(&self, $($key: $key_ty),*) -> $crate::AnyValueMap {
            self.get_as_nullable_map($($key),*).unwrap_or_default()
        }

        /// Read as a map, or `default`
        #[must_use]
        pub fn get_as_map_with_default(
            &self,
            $($key: $key_ty,)*
            default: $crate::AnyValueMap,
        ) -> $crate::AnyValueMap {
            self.get_as_nullable_map($($key),*).unwrap_or(default)
        }
    };
}

pub(crate) use typed_accessors;
