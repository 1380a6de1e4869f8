const BANK_SIZE: usize = 0x4000;
const RAM_SIZE: usize = 0x2000;

/// Fixed two-bank cartridge: ROM bank 0 at $0000–$3FFF, ROM bank 1 at
/// $4000–$7FFF (both read-only) and 8 KiB of external RAM at $A000–$BFFF.
#[derive(Clone)]
pub struct Cartridge {
    rom: Box<[u8; 2 * BANK_SIZE]>,
    ram: Box<[u8; RAM_SIZE]>,
    title: String,
    kind: u8,
}

impl Default for Cartridge {
    fn default() -> Self {
        Self::from_rom(&[])
    }
}

impl std::fmt::Debug for Cartridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cartridge")
            .field("title", &self.title)
            .field("kind", &format_args!("0x{:02X}", self.kind))
            .finish()
    }
}

impl Cartridge {
    /// Build a cartridge from a program image.
    ///
    /// Only the first two 16 KiB banks are mapped; shorter images are padded
    /// with zeros.
    pub fn from_rom(image: &[u8]) -> Self {
        let mut rom = Box::new([0u8; 2 * BANK_SIZE]);
        let len = image.len().min(rom.len());
        rom[..len].copy_from_slice(&image[..len]);

        let title = Self::parse_title(&rom[0x0134..=0x0143]);
        let kind = rom[0x0147];

        if !image.is_empty() {
            // Plain ROM, with or without RAM/battery.
            if !matches!(kind, 0x00 | 0x08 | 0x09) {
                log::warn!(
                    "cartridge '{}' declares mapper type 0x{:02X}; running it as a fixed two-bank ROM",
                    title,
                    kind
                );
            }
            if image.len() > rom.len() {
                log::warn!(
                    "cartridge image is {} bytes; only the first {} are mapped",
                    image.len(),
                    rom.len()
                );
            }
        }

        Self {
            rom,
            ram: Box::new([0u8; RAM_SIZE]),
            title,
            kind,
        }
    }

    fn parse_title(raw: &[u8]) -> String {
        raw.iter()
            .take_while(|&&b| b != 0)
            .filter(|b| b.is_ascii_graphic() || **b == b' ')
            .map(|&b| b as char)
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    /// Header title ($0134–$0143), trimmed at the first NUL.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Header cartridge type byte ($0147).
    pub fn cartridge_type(&self) -> u8 {
        self.kind
    }

    /// External RAM contents.
    pub fn ram(&self) -> &[u8] {
        &self.ram[..]
    }

    pub fn read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x7FFF => self.rom[addr as usize],
            0xA000..=0xBFFF => self.ram[(addr & 0x1FFF) as usize],
            _ => 0xFF,
        }
    }

    /// ROM writes are ignored; there is no mapper to receive them.
    pub fn write(&mut self, addr: u16, value: u8) {
        if let 0xA000..=0xBFFF = addr {
            self.ram[(addr & 0x1FFF) as usize] = value;
        }
    }
}
