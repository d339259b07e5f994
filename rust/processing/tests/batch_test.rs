// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Whole-document batches against the in-memory host.

use approx::assert_relative_eq;
use interior_elevations_geometry::{Point3, ProjectNorth, View};
use interior_elevations_processing::model::INITIAL_FAR_CLIP;
use interior_elevations_processing::{
    run_batch, ElevationContext, ElevationHost, InMemoryModel, RoomId, RoomOutcome, SkipReason,
};

const MODEL: &str = r#"{
    "north_offset_radians": 0.0,
    "rooms": [
        { "id": 1, "name": "Office", "height": 3.0, "plan": "Level 1",
          "loops": [[[0, 0], [8, 0], [8, 5], [0, 5]]] },
        { "id": 2, "name": "Storage", "height": 3.0, "plan": "Level 1", "loops": [] },
        { "id": 3, "name": "Corridor", "height": 3.0,
          "loops": [[[0, 10], [20, 10], [20, 12], [0, 12]]] },
        { "id": 4, "name": "Split", "height": 3.0, "plan": "Level 1",
          "loops": [[[0, 0], [2, 0], [2, 2], [0, 2]], [[20, 0], [22, 0], [22, 2], [20, 2]]] },
        { "id": 5, "name": "Flat", "height": 0.0, "plan": "Level 1",
          "loops": [[[30, 0], [34, 0], [34, 4], [30, 4]]] },
        { "id": 6, "name": "Lounge", "height": 2.5, "plan": "Level 1",
          "loops": [[[0, 0], [10, 0], [10, 4], [4, 4], [4, 10], [0, 10]]] },
        { "id": 7, "name": "Upper Office", "level": 10.0, "height": 3.0, "plan": "Level 2",
          "loops": [[[0, 0], [8, 0], [8, 5], [0, 5]]] }
    ]
}"#;

fn run() -> (InMemoryModel, interior_elevations_processing::BatchReport) {
    let mut model = InMemoryModel::from_json(MODEL).unwrap();
    let ctx = ElevationContext::new(ProjectNorth::from_radians(model.north_offset_radians()));
    let report = run_batch(&mut model, &ctx);
    (model, report)
}

#[test]
fn batch_continues_past_failing_rooms() {
    let (_, report) = run();

    assert_eq!(report.rooms.len(), 7);
    assert_eq!(report.placed(), 3);
    assert_eq!(report.skipped(), 2);
    assert_eq!(report.failed(), 2);
    assert_eq!(report.view_count(), 12);

    // Rooms after the two failures are still processed.
    for id in [6, 7] {
        assert!(matches!(
            report.get(RoomId(id)).unwrap().outcome,
            RoomOutcome::Placed { .. }
        ));
    }
}

#[test]
fn skip_reasons_are_reported() {
    let (_, report) = run();

    assert_eq!(
        report.get(RoomId(2)).unwrap().outcome,
        RoomOutcome::Skipped { reason: SkipReason::Unbound }
    );
    assert_eq!(
        report.get(RoomId(3)).unwrap().outcome,
        RoomOutcome::Skipped { reason: SkipReason::NoPlan }
    );
}

#[test]
fn failure_reasons_name_the_cause() {
    let (_, report) = run();

    match &report.get(RoomId(4)).unwrap().outcome {
        RoomOutcome::Failed { reason } => assert!(reason.contains("centroid"), "{reason}"),
        other => panic!("expected failure, got {other:?}"),
    }
    match &report.get(RoomId(5)).unwrap().outcome {
        RoomOutcome::Failed { reason } => assert!(reason.contains("degenerate mask"), "{reason}"),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn crop_boxes_bound_room_with_margin() {
    let (_, report) = run();

    let RoomOutcome::Placed { center, views } = &report.get(RoomId(1)).unwrap().outcome else {
        panic!("office should be placed");
    };
    assert_relative_eq!(center[0], 4.0);
    assert_relative_eq!(center[1], 2.5);
    assert_eq!(views.len(), 4);

    for view in views {
        let width = view.crop_max[0] - view.crop_min[0];
        let height = view.crop_max[1] - view.crop_min[1];
        assert_relative_eq!(height, 5.0, epsilon = 1e-9);
        // Slots alternate between the long (8) and short (5) walls.
        assert!((width - 10.0).abs() < 1e-9 || (width - 7.0).abs() < 1e-9, "width {width}");
        // Depth comes from the placed view and is untouched.
        assert_relative_eq!(view.crop_max[2] - view.crop_min[2], INITIAL_FAR_CLIP, epsilon = 1e-9);
    }

    // The −Y view's depth starts at the anchor's y.
    assert_relative_eq!(views[0].crop_max[2], 2.5, epsilon = 1e-9);

    // Slot 0 looks towards −Y, which is 90° from project north here.
    assert_relative_eq!(views[0].facing_degrees, 90.0, epsilon = 1e-9);
}

fn z_range(points: &[Point3<f64>; 4]) -> (f64, f64) {
    points
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), p| (lo.min(p.z), hi.max(p.z)))
}

#[test]
fn mask_regions_sit_on_the_room_in_world() {
    let (model, _) = run();

    // Both rooms span 0..8 by 0..5 in plan, at different levels.
    for (room, level) in [(RoomId(1), 0.0), (RoomId(7), 10.0)] {
        let ids: Vec<_> = model
            .views()
            .into_iter()
            .filter(|v| v.room == room)
            .map(|v| v.id)
            .collect();
        let regions: Vec<_> = model
            .regions()
            .iter()
            .filter(|r| ids.contains(&r.view))
            .collect();
        assert_eq!(regions.len(), 4);

        for region in regions {
            let (lo, hi) = z_range(&region.inner);
            assert_relative_eq!(lo, level, epsilon = 1e-9);
            assert_relative_eq!(hi, level + 3.0, epsilon = 1e-9);

            let (lo, hi) = z_range(&region.outer);
            assert_relative_eq!(lo, level - 1.5, epsilon = 1e-9);
            assert_relative_eq!(hi, level + 4.5, epsilon = 1e-9);

            for p in region.inner.iter().chain(region.outer.iter()) {
                assert!((-1.5 - 1e-9..=9.5 + 1e-9).contains(&p.x), "{room}: x {}", p.x);
                assert!((-1.5 - 1e-9..=6.5 + 1e-9).contains(&p.y), "{room}: y {}", p.y);
            }
        }
    }
}

#[test]
fn partial_writes_survive_a_failed_room() {
    let (model, _) = run();

    // The flat room's first view had its crop box written before the mask
    // builder rejected it.
    let flat = model
        .views()
        .into_iter()
        .find(|v| v.room == RoomId(5))
        .unwrap();
    let crop = model.view(flat.id).unwrap().crop_box();
    assert_relative_eq!(crop.max.y - crop.min.y, 2.0, epsilon = 1e-9);
    assert!(model.regions().iter().all(|r| r.view != flat.id));
}

#[test]
fn l_shaped_room_is_anchored_inside() {
    let (model, report) = run();

    let RoomOutcome::Placed { center, .. } = &report.get(RoomId(6)).unwrap().outcome else {
        panic!("lounge should be placed");
    };
    let average = 28.0 / 6.0;
    assert_relative_eq!(center[0], average - 1.0, epsilon = 1e-12);
    assert_relative_eq!(center[1], average, epsilon = 1e-12);

    let room = model.room(RoomId(6)).unwrap();
    assert!(interior_elevations_geometry::Room::is_point_inside(
        room,
        &Point3::new(center[0], center[1], center[2])
    ));
}

#[test]
fn report_serializes_to_tagged_json() {
    let (_, report) = run();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["rooms"][0]["status"], "placed");
    assert_eq!(json["rooms"][0]["name"], "Office");
    assert_eq!(json["rooms"][1]["reason"], "unbound");
    assert_eq!(json["rooms"][3]["status"], "failed");
}
