/// Rounds a floating point value to a fixed number of decimals.
pub trait RoundTo {
    /// Rounds half away from zero, `1.25.round_to(1)` is `1.3`.
    fn round_to(self, decimals: i32) -> Self;
}

macro_rules! impl_round_to {
    ($($t:ty)*) => ($(
        impl RoundTo for $t {
            fn round_to(self, decimals: i32) -> $t {
                let factor = (10 as $t).powi(decimals);
                (self * factor).round() / factor
            }
        }
    )*)
}

impl_round_to! { f64 }
