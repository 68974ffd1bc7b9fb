//! Session Scenario Tests
//!
//! Whole play-throughs with the default ten-item room.

#[cfg(test)]
mod tests {
    use crate::{
        Command, GameSession, ItemSpec, LossReason, Placement, Point, Region, Status,
        DEFAULT_TIME_BUDGET_SECS,
    };

    const SUITCASE: Region = Region { left: 500.0, top: 100.0, right: 800.0, bottom: 400.0 };
    const INSIDE: Point = Point { x: 650.0, y: 250.0 };
    const OUTSIDE: Point = Point { x: 100.0, y: 250.0 };

    /// Six items to pack (ids 1-6), four roommate items (ids 7-10)
    fn room() -> Vec<ItemSpec> {
        let names = [
            ("Shirt", true), ("Jeans", true), ("Books", true),
            ("Backpack", true), ("Dress", true), ("Shoes", true),
            ("Plant", false), ("Frame", false), ("Candle", false), ("Teddy", false),
        ];
        names
            .iter()
            .enumerate()
            .map(|(i, &(label, should_pack))| ItemSpec {
                id: i as u32 + 1,
                label: label.to_string(),
                emoji: String::new(),
                should_pack,
            })
            .collect()
    }

    fn started() -> GameSession {
        let mut session = GameSession::new(&room(), DEFAULT_TIME_BUDGET_SECS).expect("valid room");
        session.apply(Command::Start);
        session
    }

    fn drop_in(session: &mut GameSession, id: u32) -> Option<Placement> {
        session.apply(Command::Place { id, point: INSIDE, target: Some(SUITCASE) })
    }

    #[test]
    fn test_new_session_not_started() {
        let session = GameSession::new(&room(), 45).unwrap();
        assert_eq!(session.status(), Status::NotStarted);
        assert_eq!(session.seconds_remaining(), 45);
    }

    #[test]
    fn test_start_unpacks_everything() {
        let mut session = started();
        drop_in(&mut session, 1);
        drop_in(&mut session, 2);
        session.apply(Command::Start);

        assert!(session.items().iter().all(|item| !item.is_packed()));
        assert_eq!(session.status(), Status::Running);
        assert_eq!(session.seconds_remaining(), 45);
        assert_eq!(session.loss_reason(), None);
    }

    #[test]
    fn test_pack_all_correct_items_wins() {
        let mut session = started();
        for id in 1..=5 {
            assert_eq!(drop_in(&mut session, id), Some(Placement::Packed));
            assert_eq!(session.status(), Status::Running);
        }
        assert_eq!(drop_in(&mut session, 6), Some(Placement::Packed));

        assert_eq!(session.status(), Status::Won);
        assert_eq!(session.seconds_remaining(), 45);
    }

    #[test]
    fn test_wrong_item_loses_immediately() {
        let mut session = started();
        assert_eq!(drop_in(&mut session, 9), Some(Placement::Packed));

        assert_eq!(session.status(), Status::Lost);
        assert_eq!(session.loss_reason(), Some(&LossReason::WrongItems(vec![9])));
    }

    #[test]
    fn test_wrong_item_after_some_correct_loses() {
        let mut session = started();
        drop_in(&mut session, 1);
        drop_in(&mut session, 2);
        drop_in(&mut session, 10);
        assert_eq!(session.status(), Status::Lost);
    }

    #[test]
    fn test_tick_decrements_by_one() {
        let mut session = started();
        session.apply(Command::Tick);
        assert_eq!(session.seconds_remaining(), 44);
        session.apply(Command::Tick);
        assert_eq!(session.seconds_remaining(), 43);
    }

    #[test]
    fn test_tick_ignored_unless_running() {
        let mut session = GameSession::new(&room(), 45).unwrap();
        session.apply(Command::Tick);
        assert_eq!(session.seconds_remaining(), 45);

        let mut session = started();
        drop_in(&mut session, 7);
        session.apply(Command::Tick);
        assert_eq!(session.seconds_remaining(), 45);
        assert_eq!(session.status(), Status::Lost);
    }

    #[test]
    fn test_time_up_with_half_packed_loses() {
        let mut session = started();
        for id in 1..=3 {
            drop_in(&mut session, id);
        }
        for _ in 0..45 {
            session.apply(Command::Tick);
        }

        assert_eq!(session.seconds_remaining(), 0);
        assert_eq!(session.status(), Status::Lost);
        assert_eq!(session.loss_reason(), Some(&LossReason::TimeUp));
        assert_eq!(session.tally().correct_packed, 3);

        session.apply(Command::Tick);
        assert_eq!(session.seconds_remaining(), 0);
    }

    #[test]
    fn test_won_game_does_not_time_out() {
        let mut session = started();
        for id in 1..=6 {
            drop_in(&mut session, id);
        }
        for _ in 0..60 {
            session.apply(Command::Tick);
        }
        assert_eq!(session.status(), Status::Won);
    }

    #[test]
    fn test_miss_leaves_item_unpacked() {
        let mut session = started();
        let placed = session.apply(Command::Place { id: 1, point: OUTSIDE, target: Some(SUITCASE) });
        assert_eq!(placed, Some(Placement::Missed));
        assert!(!session.item(1).unwrap().is_packed());
    }

    #[test]
    fn test_unmeasured_suitcase_rejects_drop() {
        let mut session = started();
        let placed = session.apply(Command::Place { id: 1, point: INSIDE, target: None });
        assert_eq!(placed, Some(Placement::Missed));
        assert_eq!(session.status(), Status::Running);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut session = started();
        let before = session.clone();
        assert_eq!(drop_in(&mut session, 42), Some(Placement::Ignored));
        assert_eq!(session, before);
    }

    #[test]
    fn test_place_before_start_ignored() {
        let mut session = GameSession::new(&room(), 45).unwrap();
        assert_eq!(drop_in(&mut session, 1), Some(Placement::Ignored));
        assert!(!session.item(1).unwrap().is_packed());
    }

    #[test]
    fn test_restart_after_loss() {
        let mut session = started();
        drop_in(&mut session, 8);
        assert_eq!(session.status(), Status::Lost);

        session.apply(Command::Start);
        assert_eq!(session.status(), Status::Running);
        for id in 1..=6 {
            drop_in(&mut session, id);
        }
        assert_eq!(session.status(), Status::Won);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut specs = room();
        specs[3].id = 1;
        assert_eq!(GameSession::new(&specs, 45), Err(crate::SessionError::DuplicateItemId(1)));
    }

    #[test]
    fn test_empty_packing_list_rejected() {
        let specs: Vec<_> = room().into_iter().filter(|s| !s.should_pack).collect();
        assert_eq!(GameSession::new(&specs, 45), Err(crate::SessionError::EmptyPackingList));
    }

    #[test]
    fn test_zero_time_budget_rejected() {
        assert_eq!(GameSession::new(&room(), 0), Err(crate::SessionError::ZeroTimeBudget));
        // One second is the shortest playable clock
        let mut session = GameSession::new(&room(), 1).unwrap();
        session.start();
        assert!(session.is_running());
        session.tick();
        assert_eq!(session.status(), Status::Lost);
    }

    #[test]
    fn test_views_split_items() {
        let mut session = started();
        drop_in(&mut session, 2);
        assert_eq!(session.packing_list().count(), 6);
        assert_eq!(session.packed().map(|i| i.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(session.unpacked().count(), 9);
    }
}
