//! Unit tests for hub-core.

mod ids {
    use crate::TurtleId;

    #[test]
    fn wire_form_is_decimal_string() {
        assert_eq!(TurtleId(1).to_string(), "1");
        assert_eq!(TurtleId(42).to_string(), "42");
        assert_eq!("7".parse::<TurtleId>().unwrap(), TurtleId(7));
    }

    #[test]
    fn rejects_non_numeric() {
        assert!("one".parse::<TurtleId>().is_err());
        assert!("".parse::<TurtleId>().is_err());
        assert!("-1".parse::<TurtleId>().is_err());
    }

    #[test]
    fn serde_round_trips_as_string() {
        let json = serde_json::to_string(&TurtleId(3)).unwrap();
        assert_eq!(json, "\"3\"");
        let back: TurtleId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TurtleId(3));
    }

    #[test]
    fn orders_numerically() {
        assert!(TurtleId(2) < TurtleId(10));
    }
}

mod block_pos {
    use crate::BlockPos;

    #[test]
    fn parse_key_signed() {
        assert_eq!(BlockPos::parse_key("1,2,3").unwrap(), BlockPos::new(1, 2, 3));
        assert_eq!(
            BlockPos::parse_key("-10,0,-3").unwrap(),
            BlockPos::new(-10, 0, -3)
        );
    }

    #[test]
    fn parse_key_rejects_malformed() {
        for bad in ["", "1,2", "1,2,3,4", "a,b,c", "1, 2, 3", "1.5,2,3"] {
            assert!(BlockPos::parse_key(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn key_round_trip() {
        let pos = BlockPos::new(-7, 64, 128);
        assert_eq!(BlockPos::parse_key(&pos.key()).unwrap(), pos);
    }

    #[test]
    fn dist2_is_exact() {
        let a = BlockPos::new(0, 0, 0);
        assert_eq!(a.dist2(BlockPos::new(3, 4, 0)), 25);
        assert_eq!(a.dist2(BlockPos::new(-1, -1, -1)), 3);
    }

    #[test]
    fn dist2_spans_the_full_coordinate_range() {
        let a = BlockPos::new(i32::MAX, i32::MAX, i32::MAX);
        let b = BlockPos::new(i32::MIN, i32::MIN, i32::MIN);
        let span = i32::MAX as i128 - i32::MIN as i128;
        assert_eq!(a.dist2(b), 3 * span * span);
    }

    #[test]
    fn ord_is_lexicographic() {
        assert!(BlockPos::new(0, 9, 9) < BlockPos::new(1, 0, 0));
        assert!(BlockPos::new(1, 0, 9) < BlockPos::new(1, 1, 0));
    }
}

mod classifier {
    use crate::{COST_BLOCKED, COST_FREE, classify};

    #[test]
    fn rule_table() {
        assert_eq!(classify("minecraft:grass_block").cost, 5);
        assert_eq!(classify("minecraft:grass_block").color, "#55a630");
        assert_eq!(classify("iron_ore").cost, 10);
        assert_eq!(classify("dirt").cost, 5);
        assert_eq!(classify("cobblestone").cost, 8);
        assert_eq!(classify("lava").cost, COST_BLOCKED);
    }

    #[test]
    fn unknown_names_are_free_air() {
        let style = classify("minecraft:air");
        assert_eq!(style.cost, COST_FREE);
        assert_eq!(style.color, "#808080");
    }

    #[test]
    fn table_order_wins() {
        // "lava_ore" contains both "ore" and "lava"; the ore rule comes first.
        let style = classify("lava_ore");
        assert_eq!(style.color, "#37eb34");
        assert_eq!(style.cost, 10);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(classify("LAVA").cost, COST_FREE);
    }

    #[test]
    fn deterministic() {
        assert_eq!(classify("deepslate_iron_ore"), classify("deepslate_iron_ore"));
    }
}

mod commands {
    use crate::{BlockPos, Command, split_batch};

    #[test]
    fn parse_goto() {
        assert_eq!(
            Command::parse("goto 1 -2 3").unwrap(),
            Command::Goto(BlockPos::new(1, -2, 3))
        );
    }

    #[test]
    fn goto_bad_coords_is_error() {
        assert!(Command::parse("goto 1 2").is_err());
        assert!(Command::parse("goto a b c").is_err());
        assert!(Command::parse("goto 1 2 3 4").is_err());
    }

    #[test]
    fn parse_mine_and_mineall() {
        assert_eq!(
            Command::parse("mine iron_ore").unwrap(),
            Command::Mine("iron_ore".into())
        );
        assert_eq!(
            Command::parse("mineall dirt").unwrap(),
            Command::MineAll("dirt".into())
        );
        assert!(Command::parse("mine").is_err());
        assert!(Command::parse("mineall").is_err());
    }

    #[test]
    fn unknown_verbs_pass_through() {
        assert_eq!(
            Command::parse("  forward  ").unwrap(),
            Command::Passthrough("forward".into())
        );
        assert_eq!(
            Command::parse("turnLeft").unwrap(),
            Command::Passthrough("turnLeft".into())
        );
    }

    #[test]
    fn wire_rendering() {
        let pos = BlockPos::new(3, 0, -1);
        assert_eq!(Command::goto_line(pos), "goto 3 0 -1");
        assert_eq!(Command::mine_line(pos), "mine 3 0 -1");
    }

    #[test]
    fn batch_splits_on_commas_and_newlines() {
        assert_eq!(
            split_batch("forward, back\nmine dirt,  ,\n"),
            vec!["forward", "back", "mine dirt"]
        );
        assert!(split_batch("  \n , ").is_empty());
    }
}

mod directions {
    use crate::direction_label;

    #[test]
    fn cardinal_labels() {
        assert_eq!(direction_label(0), "North");
        assert_eq!(direction_label(1), "East");
        assert_eq!(direction_label(2), "South");
        assert_eq!(direction_label(3), "West");
    }

    #[test]
    fn unknown_codes() {
        assert_eq!(direction_label(4), "Unknown");
        assert_eq!(direction_label(-1), "Unknown");
    }
}
