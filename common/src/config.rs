/// Runtime flags collected by the CLI and threaded into every handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Output reduction level.
    ///
    /// 0 prints everything, 1 trims decoration (headers, separators),
    /// 2 leaves bare results only.
    pub quiet: u8,
    /// Suppresses the startup banner.
    pub no_banner: bool,
}
