//! Tests for grid geometry of packed sheets

#[cfg(test)]
mod tests {
    use spritepack::packing::grid::{GridLayout, ceil_sqrt};

    // Tests cols is the smallest value with cols >= sqrt(n) and rows the smallest covering n
    // Verified by flooring the square root
    #[test]
    fn test_grid_dimensions_are_minimal() {
        for n in 1..=600_u32 {
            let layout = GridLayout::for_count(n, (16, 16));
            let (cols, rows) = (layout.cols, layout.rows);

            assert!(cols * cols >= n, "cols too small for {n}");
            assert!((cols - 1) * (cols - 1) < n, "cols not minimal for {n}");
            assert!(cols * rows >= n, "rows too small for {n}");
            assert!(cols * (rows - 1) < n, "rows not minimal for {n}");
        }
    }

    // Tests known layouts for small collections
    // Verified by swapping rows and cols
    #[test]
    fn test_known_layouts() {
        let cases = [(1, 1, 1), (2, 2, 1), (4, 2, 2), (5, 3, 2), (10, 4, 3), (107, 11, 10)];

        for (count, cols, rows) in cases {
            let layout = GridLayout::for_count(count, (32, 32));
            assert_eq!((layout.cols, layout.rows), (cols, rows), "count {count}");
        }
    }

    // Tests the empty collection yields an empty grid
    // Verified by dividing by zero columns
    #[test]
    fn test_empty_layout() {
        let layout = GridLayout::for_count(0, (8, 8));
        assert_eq!(layout.canvas_size(), (0, 0));
        assert_eq!(layout.capacity(), 0);
        assert_eq!(layout.slot(3), (0, 0));
    }

    // Tests slots fill row by row in index order
    // Verified by filling column by column
    #[test]
    fn test_slot_and_origin() {
        let layout = GridLayout::for_count(5, (16, 24));

        assert_eq!(layout.canvas_size(), (48, 48));
        assert_eq!(layout.slot(0), (0, 0));
        assert_eq!(layout.slot(2), (2, 0));
        assert_eq!(layout.slot(3), (0, 1));
        assert_eq!(layout.origin(4), (16, 24));
    }

    // Tests every slot of a full grid stays inside the canvas
    // Verified by using rows in place of cols for the canvas width
    #[test]
    fn test_origins_within_canvas() {
        for n in [1_u32, 3, 7, 17, 64, 99] {
            let layout = GridLayout::for_count(n, (10, 6));
            let (width, height) = layout.canvas_size();
            for index in 0..n {
                let (x, y) = layout.origin(index);
                assert!(x + 10 <= width && y + 6 <= height);
            }
        }
    }

    // Tests integer ceiling square root at perfect squares and neighbours
    // Verified by returning the floor root
    #[test]
    fn test_ceil_sqrt() {
        assert_eq!(ceil_sqrt(0), 0);
        assert_eq!(ceil_sqrt(1), 1);
        assert_eq!(ceil_sqrt(15), 4);
        assert_eq!(ceil_sqrt(16), 4);
        assert_eq!(ceil_sqrt(17), 5);
        assert_eq!(ceil_sqrt(u32::MAX), 65_536);
    }
}
