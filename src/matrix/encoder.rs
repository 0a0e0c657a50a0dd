//! Matrix-code generation.

use anyhow::{Result, anyhow};
use qrcode::{Color, EcLevel, QrCode, Version, bits::Bits};

/// Error-correction strength requested from the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCorrection {
    Low,
    Medium,
    Quartile,
    High,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => EcLevel::L,
            ErrorCorrection::Medium => EcLevel::M,
            ErrorCorrection::Quartile => EcLevel::Q,
            ErrorCorrection::High => EcLevel::H,
        }
    }
}

/// Square grid of modules, without a quiet zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    side: usize,
    modules: Vec<bool>,
}

impl ModuleGrid {
    /// `None` unless `modules` holds exactly `side * side` entries.
    pub fn new(side: usize, modules: Vec<bool>) -> Option<Self> {
        (modules.len() == side * side).then_some(Self { side, modules })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn is_set(&self, x: usize, y: usize) -> bool {
        x < self.side && y < self.side && self.modules[y * self.side + x]
    }
}

/// Turns a payload into a module grid.
pub trait MatrixEncoder {
    fn encode(&self, payload: &str, level: ErrorCorrection) -> Result<ModuleGrid>;
}

/// QR Code generator. Payloads are always encoded as 8-bit bytes so case and
/// multi-byte glyphs survive unchanged, in the smallest version that fits.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrEncoder;

impl MatrixEncoder for QrEncoder {
    fn encode(&self, payload: &str, level: ErrorCorrection) -> Result<ModuleGrid> {
        let ec_level = EcLevel::from(level);

        for version in 1..=40 {
            let mut bits = Bits::new(Version::Normal(version));
            if bits.push_byte_data(payload.as_bytes()).is_err()
                || bits.push_terminator(ec_level).is_err()
            {
                continue;
            }

            let code = QrCode::with_bits(bits, ec_level)
                .map_err(|e| anyhow!("QR encoding failed at version {}: {:?}", version, e))?;
            let side = code.width();
            let modules = code
                .to_colors()
                .into_iter()
                .map(|color| color == Color::Dark)
                .collect();

            return ModuleGrid::new(side, modules)
                .ok_or_else(|| anyhow!("QR code returned a non-square module grid"));
        }

        Err(anyhow!(
            "payload of {} bytes does not fit in any QR version",
            payload.len()
        ))
    }
}
