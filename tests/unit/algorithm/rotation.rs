//! Tests for rotation permutations and rotation sets

#[cfg(test)]
mod tests {
    use dungeontile::algorithm::rotation::{
        ROTATION_LOOKUP, Rotation, RotationSet, rotated_index,
    };

    // Tests the identity rotation maps every slot to itself
    // Verified by swapping two entries of the identity row
    #[test]
    fn test_identity_permutation() {
        for slot in 0..8 {
            assert_eq!(rotated_index(Rotation::R0, slot), slot);
        }
    }

    // Tests composing quarter turns gives the larger rotations
    // Verified by transposing the 270° row
    #[test]
    fn test_quarter_turns_compose() {
        let quarter = Rotation::R90.permutation();
        for slot in 0..8 {
            let twice = rotated_index(Rotation::R90, rotated_index(Rotation::R90, slot));
            assert_eq!(twice, rotated_index(Rotation::R180, slot));

            let thrice = rotated_index(Rotation::R90, rotated_index(Rotation::R180, slot));
            assert_eq!(thrice, rotated_index(Rotation::R270, slot));

            let full = rotated_index(Rotation::R90, rotated_index(Rotation::R270, slot));
            assert_eq!(full, slot);
        }
        assert_eq!(quarter, &[2, 4, 7, 1, 6, 0, 3, 5]);
    }

    // Tests every row is a permutation of the eight slots
    // Verified by duplicating a slot in the 90° row
    #[test]
    fn test_rows_are_permutations() {
        for row in ROTATION_LOOKUP {
            let mut sorted = row;
            sorted.sort_unstable();
            assert_eq!(sorted, [0, 1, 2, 3, 4, 5, 6, 7]);
        }
    }

    // Tests angle conversions and stepping between rotations
    // Verified by skipping the modulo in from_degrees
    #[test]
    fn test_rotation_angles() {
        assert_eq!(Rotation::from_degrees(450), Some(Rotation::R90));
        assert_eq!(Rotation::from_degrees(45), None);
        assert_eq!(Rotation::R270.next(), Rotation::R0);
        assert_eq!(Rotation::R180.to_string(), "180°");
        for rotation in Rotation::ALL {
            assert_eq!(Rotation::from_degrees(rotation.degrees()), Some(rotation));
            assert_eq!(Rotation::ALL.get(rotation.index()), Some(&rotation));
        }
        assert_eq!(rotated_index(Rotation::R90, 9), 9);
    }

    // Tests set construction and membership
    // Verified by counting duplicates twice
    #[test]
    fn test_rotation_set_membership() {
        assert!(RotationSet::empty().is_empty());
        assert_eq!(RotationSet::all().len(), 4);

        let identity = RotationSet::identity();
        assert!(identity.contains(Rotation::R0));
        assert!(!identity.contains(Rotation::R90));

        let mut set = RotationSet::from_rotations(&[Rotation::R180, Rotation::R0, Rotation::R180]);
        assert_eq!(set.len(), 2);
        assert_eq!(format!("{set:?}"), "{R0, R180}");

        set.insert(Rotation::R90);
        let listed: Vec<Rotation> = set.iter().collect();
        assert_eq!(listed, vec![Rotation::R0, Rotation::R90, Rotation::R180]);
    }
}
