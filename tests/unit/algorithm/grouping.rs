//! Tests for row grouping and serpentine ordering

#[cfg(test)]
mod tests {
    use primetile::algorithm::grouping::{SortDirection, group_and_sort};
    use primetile::spatial::tiles::Dimensions;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Block {
        id: usize,
        width: u32,
        height: u32,
    }

    impl Dimensions for Block {
        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }
    }

    fn blocks(sizes: &[(u32, u32)]) -> Vec<Block> {
        sizes
            .iter()
            .enumerate()
            .map(|(id, &(width, height))| Block { id, width, height })
            .collect()
    }

    fn widths(row: &[Block]) -> Vec<u32> {
        row.iter().map(|block| block.width).collect()
    }

    // Tests row order by height and alternating width order
    // Verified by sorting every row ascending
    #[test]
    fn test_serpentine_order() {
        let tiles = blocks(&[(2, 5), (7, 5), (5, 3), (2, 3), (3, 3)]);
        let grouping = group_and_sort(tiles);

        assert_eq!(grouping.heights(), vec![3, 5]);
        let rows = grouping.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(widths(&rows[0].tiles), vec![2, 3, 5]);
        assert_eq!(widths(&rows[1].tiles), vec![7, 2]);
        assert_eq!(grouping.tile_count(), 5);
    }

    // Tests that equal widths keep their arrival order in both directions
    // Verified by switching to an unstable sort
    #[test]
    fn test_ties_are_stable() {
        let tiles = blocks(&[(3, 2), (3, 2), (5, 2), (3, 2), (3, 7), (5, 7), (3, 7)]);
        let grouping = group_and_sort(tiles);
        let rows = grouping.rows();

        let first: Vec<usize> = rows[0].tiles.iter().map(|b| b.id).collect();
        assert_eq!(first, vec![0, 1, 3, 2]);

        let second: Vec<usize> = rows[1].tiles.iter().map(|b| b.id).collect();
        assert_eq!(second, vec![5, 4, 6]);
    }

    // Tests that three rows alternate ascending, descending, ascending
    // Verified by using the row height parity instead of the row index
    #[test]
    fn test_direction_follows_row_index() {
        let tiles = blocks(&[(5, 4), (2, 4), (2, 8), (5, 8), (5, 2), (2, 2)]);
        let grouping = group_and_sort(tiles);
        let rows = grouping.rows();

        assert_eq!(grouping.heights(), vec![2, 4, 8]);
        assert_eq!(widths(&rows[0].tiles), vec![2, 5]);
        assert_eq!(widths(&rows[1].tiles), vec![5, 2]);
        assert_eq!(widths(&rows[2].tiles), vec![2, 5]);
        assert_eq!(rows[1].width(), 7);
    }

    // Tests the direction helper
    // Verified by inverting the parity test
    #[test]
    fn test_sort_direction_for_row() {
        assert_eq!(SortDirection::for_row(0), SortDirection::Ascending);
        assert_eq!(SortDirection::for_row(1), SortDirection::Descending);
        assert_eq!(SortDirection::for_row(4), SortDirection::Ascending);
    }

    // Tests that no tiles produce no rows
    // Verified by seeding an empty default row
    #[test]
    fn test_empty_input() {
        let grouping = group_and_sort(Vec::<Block>::new());
        assert!(grouping.is_empty());
        assert_eq!(grouping.len(), 0);
        assert_eq!(grouping.tile_count(), 0);
    }
}
