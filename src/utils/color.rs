use crate::error::ColorError;
use eframe::egui::Color32;

/// Validate 0-255 channel bytes and scale them to 0..1 floats.
///
/// The range is checked before the channel count, so `[256, 0]` reports the
/// bad channel rather than the arity.
pub fn channels_from_bytes(bytes: &[i32]) -> Result<Vec<f32>, ColorError> {
    if let Some((channel, &value)) = bytes
        .iter()
        .enumerate()
        .find(|(_, v)| !(0..=255).contains(*v))
    {
        return Err(ColorError::OutOfRange { channel, value });
    }
    if !(3..=4).contains(&bytes.len()) {
        return Err(ColorError::WrongArity { len: bytes.len() });
    }
    Ok(bytes.iter().map(|&b| b as f32 / 255.0).collect())
}

/// Simple RGBA color stored as floats in 0..1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLUE: Color = Color::rgb8(0, 3, 126);
    pub const ORANGE: Color = Color::rgb8(255, 109, 50);
    pub const GREEN: Color = Color::rgb8(0, 124, 126);
    pub const WHITE: Color = Color::rgb8(255, 255, 255);

    const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Build from 3 (opaque) or 4 channel bytes.
    pub fn from_bytes(bytes: &[i32]) -> Result<Self, ColorError> {
        let channels = channels_from_bytes(bytes)?;
        Ok(Self {
            r: channels[0],
            g: channels[1],
            b: channels[2],
            a: channels.get(3).copied().unwrap_or(1.0),
        })
    }

    /// RGBA channel bytes, the form settings files store colors in.
    pub fn to_bytes(&self) -> Vec<i32> {
        [self.r, self.g, self.b, self.a]
            .iter()
            .map(|c| (c * 255.0).round() as i32)
            .collect()
    }

    /// Convert to egui's 8-bit color format.
    pub fn to_color32(&self) -> Color32 {
        Color32::from_rgba_unmultiplied(
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            (self.a * 255.0).round() as u8,
        )
    }
}
