//! Arithmetic mean for confidence aggregation

/// Mean of the values, or 0 when there are none
pub fn average<I>(values: I) -> f32
where
    I: IntoIterator<Item = f32>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0_f32, 0_usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f32
    }
}
