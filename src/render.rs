use macroquad::prelude::*;

use crate::board::{Board, Cell};

pub const BACKGROUND: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];
pub const SNAKE: [u8; 4] = [0x4C, 0xAF, 0x50, 0xFF];
pub const FOOD: [u8; 4] = [0xFF, 0x57, 0x22, 0xFF];
pub const GRID_LINE: [u8; 4] = [0xE0, 0xE0, 0xE0, 0xFF];

pub fn color(rgba: [u8; 4]) -> Color {
    Color::from_rgba(rgba[0], rgba[1], rgba[2], rgba[3])
}

/// Draws the board into a square CPU raster.
pub struct Renderer {
    cell_size: u32,
}

impl Renderer {
    pub fn new(cell_size: u32) -> Self {
        Self { cell_size }
    }

    pub fn blank_surface(canvas_size: u16) -> Image {
        Image::gen_image_color(canvas_size, canvas_size, color(BACKGROUND))
    }

    /// Full redraw: clear, snake, food, then the guide lines on top.
    pub fn draw(&self, board: &Board, surface: Option<&mut Image>) {
        let Some(image) = surface else {
            return;
        };

        fill(image, 0, 0, u32::from(image.width), u32::from(image.height), BACKGROUND);

        for &segment in board.snake() {
            self.fill_cell(image, segment, SNAKE);
        }
        self.fill_cell(image, board.food(), FOOD);

        let size = u32::from(image.width);
        for i in 0..board.grid_size() as u32 {
            let at = i * self.cell_size;
            fill(image, at, 0, 1, size, GRID_LINE);
            fill(image, 0, at, size, 1, GRID_LINE);
        }
    }

    fn fill_cell(&self, image: &mut Image, cell: Cell, rgba: [u8; 4]) {
        if cell.x < 0 || cell.y < 0 {
            return;
        }
        fill(
            image,
            cell.x as u32 * self.cell_size,
            cell.y as u32 * self.cell_size,
            self.cell_size,
            self.cell_size,
            rgba,
        );
    }
}

// clipped to the image
fn fill(image: &mut Image, x0: u32, y0: u32, w: u32, h: u32, rgba: [u8; 4]) {
    let width = u32::from(image.width);
    let height = u32::from(image.height);
    let x1 = (x0 + w).min(width);
    let y1 = (y0 + h).min(height);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    for y in y0..y1 {
        let row = (y * width) as usize * 4;
        let start = row + x0 as usize * 4;
        let end = row + x1 as usize * 4;
        for px in image.bytes[start..end].chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(image: &Image, x: u32, y: u32) -> [u8; 4] {
        let i = (y * u32::from(image.width) + x) as usize * 4;
        [image.bytes[i], image.bytes[i + 1], image.bytes[i + 2], image.bytes[i + 3]]
    }

    fn centre(cell: Cell) -> (u32, u32) {
        (cell.x as u32 * 20 + 10, cell.y as u32 * 20 + 10)
    }

    #[test]
    fn paints_snake_food_and_background() {
        let board = Board::new(20, Cell::new(10, 10), Cell::new(15, 15));
        let mut image = Renderer::blank_surface(400);
        Renderer::new(20).draw(&board, Some(&mut image));

        let (x, y) = centre(Cell::new(10, 10));
        assert_eq!(pixel(&image, x, y), SNAKE);
        let (x, y) = centre(Cell::new(15, 15));
        assert_eq!(pixel(&image, x, y), FOOD);
        let (x, y) = centre(Cell::new(3, 7));
        assert_eq!(pixel(&image, x, y), BACKGROUND);
    }

    #[test]
    fn guide_lines_overlay_cells() {
        let board = Board::new(20, Cell::new(10, 10), Cell::new(15, 15));
        let mut image = Renderer::blank_surface(400);
        Renderer::new(20).draw(&board, Some(&mut image));

        // top-left corner of the snake cell sits on both guide lines
        assert_eq!(pixel(&image, 200, 200), GRID_LINE);
        assert_eq!(pixel(&image, 200, 205), GRID_LINE);
        assert_eq!(pixel(&image, 0, 399), GRID_LINE);
        // no closing line on the far edge
        assert_eq!(pixel(&image, 399, 5), BACKGROUND);
    }

    #[test]
    fn redraw_clears_previous_frame() {
        let mut image = Renderer::blank_surface(400);
        let renderer = Renderer::new(20);
        renderer.draw(&Board::new(20, Cell::new(1, 1), Cell::new(2, 2)), Some(&mut image));
        renderer.draw(&Board::new(20, Cell::new(5, 5), Cell::new(6, 6)), Some(&mut image));

        let (x, y) = centre(Cell::new(1, 1));
        assert_eq!(pixel(&image, x, y), BACKGROUND);
        let (x, y) = centre(Cell::new(5, 5));
        assert_eq!(pixel(&image, x, y), SNAKE);
    }

    #[test]
    fn food_drawn_over_snake() {
        let board = Board::new(20, Cell::new(4, 4), Cell::new(4, 4));
        let mut image = Renderer::blank_surface(400);
        Renderer::new(20).draw(&board, Some(&mut image));

        let (x, y) = centre(Cell::new(4, 4));
        assert_eq!(pixel(&image, x, y), FOOD);
    }

    #[test]
    fn missing_surface_is_a_no_op() {
        let board = Board::new(20, Cell::new(10, 10), Cell::new(15, 15));
        Renderer::new(20).draw(&board, None);
    }
}
