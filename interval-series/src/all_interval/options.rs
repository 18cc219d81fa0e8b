/// The options of an All-Interval Series instance.
///
/// ```rust
/// # use interval_series::all_interval::SeriesOptions;
/// let options = SeriesOptions {
///     use_auxiliary_views: true,
///     ..Default::default()
/// };
/// assert_eq!(1000, options.size);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeriesOptions {
    /// The length `m` of the series; has to be at least 1.
    pub size: i32,
    /// Model every distance through an auxiliary difference variable `k` with `v[i] + k =
    /// v[i + 1]` and `distance = |k|`, instead of with a single distance propagator.
    pub use_auxiliary_views: bool,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self {
            size: 1000,
            use_auxiliary_views: false,
        }
    }
}
