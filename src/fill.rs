use crate::color::Palette;
use crate::window::WindowBuffer;

/// Supplies the palette index for each painted band.
///
/// The filler draws a fresh index for every row, so the source controls the
/// whole visual rhythm of a frame. The stock implementation is
/// [`RandomBands`]; tests feed fixed sequences instead.
pub trait BandSource {
    /// Next uniform index in `0..len`.
    fn next_band(&mut self, len: usize) -> usize;
}

/// Uniform random band picks.
#[derive(Debug, Default)]
pub struct RandomBands;

impl BandSource for RandomBands {
    fn next_band(&mut self, len: usize) -> usize {
        rand::random_range(0..len)
    }
}

/// Paints every row of `buffer` with a single palette color, drawing a fresh
/// color for each row.
///
/// Each row is painted one pixel past the visible width whenever the stride
/// leaves room; the extra pixel lands in row padding and is never shown.
/// Degenerate buffers (zero width or height) are left untouched.
pub fn fill_frame(buffer: &mut WindowBuffer<'_>, palette: &Palette, bands: &mut dyn BandSource) {
    if buffer.width == 0 || buffer.height == 0 {
        return;
    }

    let width = buffer.width as usize;
    let stride = buffer.stride as usize;
    let total = buffer.pixels.len();

    let mut row_start = 0;
    for _ in 0..buffer.height {
        let color = palette.color(bands.next_band(palette.len()));

        // One pixel of overscan, kept inside the row's stride extent.
        let row_end = (row_start + width + 1).min(row_start + stride).min(total);
        for pixel in &mut buffer.pixels[row_start..row_end] {
            *pixel = color;
        }

        row_start += stride;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PALETTE_LEN;
    use crate::window::WindowBuffer;

    /// Replays a fixed index sequence, wrapping around at the end.
    struct SeqBands {
        seq: Vec<usize>,
        at: usize,
    }

    impl SeqBands {
        fn new(seq: &[usize]) -> Self {
            Self {
                seq: seq.to_vec(),
                at: 0,
            }
        }
    }

    impl BandSource for SeqBands {
        fn next_band(&mut self, len: usize) -> usize {
            let pick = self.seq[self.at % self.seq.len()] % len;
            self.at += 1;
            pick
        }
    }

    #[test]
    fn each_row_holds_a_single_palette_color() {
        let palette = Palette::default();
        let mut pixels = vec![0u16; 8 * 4];
        let mut buffer = WindowBuffer::from_raw(&mut pixels, 6, 4, 8);
        let mut bands = SeqBands::new(&[0, 1, 2, 3]);

        fill_frame(&mut buffer, &palette, &mut bands);

        for (row_index, row) in pixels.chunks(8).enumerate() {
            let expected = palette.color(row_index);
            assert!(
                row[..6].iter().all(|pixel| *pixel == expected),
                "row {} not uniform",
                row_index
            );
        }
    }

    /// The overscan pixel lands in the padding column, one past the width;
    /// padding beyond it stays untouched.
    #[test]
    fn overscan_writes_one_pixel_into_row_padding() {
        let palette = Palette::default();
        let mut pixels = vec![0u16; 8 * 3];
        let mut buffer = WindowBuffer::from_raw(&mut pixels, 6, 3, 8);
        let mut bands = SeqBands::new(&[3]);

        fill_frame(&mut buffer, &palette, &mut bands);

        for row in pixels.chunks(8) {
            assert_eq!(row[6], palette.color(3));
            assert_eq!(row[7], 0);
        }
    }

    /// With no padding there is nowhere to overscan into; the fill stays
    /// inside each row and inside the slice.
    #[test]
    fn unpadded_buffers_stay_in_bounds() {
        let palette = Palette::default();
        let mut pixels = vec![0u16; 4 * 3];
        let mut buffer = WindowBuffer::from_raw(&mut pixels, 4, 3, 4);
        let mut bands = SeqBands::new(&[0, 1, 2]);

        fill_frame(&mut buffer, &palette, &mut bands);

        for (row_index, row) in pixels.chunks(4).enumerate() {
            assert!(row.iter().all(|pixel| *pixel == palette.color(row_index)));
        }
    }

    #[test]
    fn a_short_final_row_is_clamped_to_the_slice() {
        let palette = Palette::default();
        let mut pixels = vec![0u16; 8 + 6];
        let mut buffer = WindowBuffer::from_raw(&mut pixels, 6, 2, 8);
        let mut bands = SeqBands::new(&[1]);

        fill_frame(&mut buffer, &palette, &mut bands);

        assert!(pixels[8..].iter().all(|pixel| *pixel == palette.color(1)));
    }

    #[test]
    fn degenerate_buffers_are_left_untouched() {
        let palette = Palette::default();
        let mut bands = SeqBands::new(&[0]);

        let mut pixels = vec![0u16; 8];
        let mut no_width = WindowBuffer::from_raw(&mut pixels, 0, 2, 4);
        fill_frame(&mut no_width, &palette, &mut bands);
        assert!(pixels.iter().all(|pixel| *pixel == 0));

        let mut pixels = vec![0u16; 8];
        let mut no_height = WindowBuffer::from_raw(&mut pixels, 4, 0, 4);
        fill_frame(&mut no_height, &palette, &mut bands);
        assert!(pixels.iter().all(|pixel| *pixel == 0));
    }

    /// Random picks should spread across all four colors over enough rows.
    /// Loose bounds: 4000 rows at p=1/4 sit within ±150 of 1000 for any
    /// plausible run.
    #[test]
    fn random_bands_spread_over_the_whole_palette() {
        let palette = Palette::default();
        let rows = 4000u32;
        let mut pixels = vec![0u16; rows as usize];
        let mut buffer = WindowBuffer::from_raw(&mut pixels, 1, rows, 1);
        let mut bands = RandomBands;

        fill_frame(&mut buffer, &palette, &mut bands);

        let mut counts = [0u32; PALETTE_LEN];
        for pixel in &pixels {
            let index = palette
                .colors()
                .iter()
                .position(|color| color == pixel)
                .expect("pixel outside the palette");
            counts[index] += 1;
        }

        for (index, count) in counts.iter().enumerate() {
            assert!(
                (850..=1150).contains(count),
                "color {} drawn {} times out of {}",
                index,
                count,
                rows
            );
        }
    }
}
