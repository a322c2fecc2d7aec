use rand::Rng;

use crate::grid::{BOARD_SIZE, Coordinate};

/// Picks a uniformly random free cell by rejection sampling.
///
/// `occupied` must leave at least one cell free, otherwise this never returns.
pub fn place<R: Rng>(occupied: &[Coordinate], rng: &mut R) -> Coordinate {
    loop {
        let cell = Coordinate {
            x: rng.random_range(0..BOARD_SIZE),
            y: rng.random_range(0..BOARD_SIZE),
        };
        if !occupied.contains(&cell) {
            return cell;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn never_lands_on_occupied_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let occupied: Vec<Coordinate> = (0..BOARD_SIZE).map(|x| Coordinate::new(x, 3)).collect();
        for _ in 0..500 {
            let food = place(&occupied, &mut rng);
            assert!(food.in_bounds());
            assert!(!occupied.contains(&food));
        }
    }

    #[test]
    fn finds_the_single_free_cell() {
        let mut rng = StdRng::seed_from_u64(42);
        let free = Coordinate::new(13, 2);
        let occupied: Vec<Coordinate> = (0..BOARD_SIZE)
            .flat_map(|y| (0..BOARD_SIZE).map(move |x| Coordinate::new(x, y)))
            .filter(|c| *c != free)
            .collect();
        assert_eq!(place(&occupied, &mut rng), free);
    }
}
