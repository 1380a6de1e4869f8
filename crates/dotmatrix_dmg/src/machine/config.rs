use typed_builder::TypedBuilder;

/// Machine construction options.
///
/// ```
/// use dotmatrix_dmg::MachineConfig;
///
/// let config = MachineConfig::builder().randomize_ram(false).build();
/// assert!(config.boot_rom.is_none());
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct MachineConfig {
    /// Boot image mapped over $0000–$00FF until a write to $FF50 with bit 0
    /// set. When present the machine starts from the raw power-on state at
    /// PC=0; otherwise it starts from the post-boot state at PC=0x0100.
    #[builder(default, setter(strip_option))]
    pub boot_rom: Option<Vec<u8>>,
    /// Seed WRAM/HRAM with a fixed pseudo-random pattern instead of zeros.
    #[builder(default = true)]
    pub randomize_ram: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
