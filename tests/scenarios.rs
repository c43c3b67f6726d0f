use officelayout::geometry::Point;
use officelayout::layout::Metadata;
use officelayout::object_types::ObjectType;
use officelayout::validation::ValidationKind;
use officelayout::{find_shortest_path_to_exit, validate, Layout};

#[test]
fn scenario_simple_overlap() {
    let mut layout = Layout::new(100.0, 100.0);
    let a = layout
        .add_object(ObjectType::Desk, 10.0, 10.0, 20.0, 20.0, 0.0, Metadata::new(), None)
        .unwrap()
        .id;
    let b = layout
        .add_object(ObjectType::Desk, 25.0, 15.0, 20.0, 20.0, 0.0, Metadata::new(), None)
        .unwrap()
        .id;

    let errors = validate(&layout);
    assert!(errors
        .iter()
        .any(|e| e.kind == ValidationKind::Collision && e.object_ids == vec![a, b]));
    assert!(errors.iter().any(|e| matches!(
        &e.kind,
        ValidationKind::DistanceTooSmall { required, .. } if *required == 50.0
    )));
}

#[test]
fn scenario_wall_convention() {
    let mut layout = Layout::new(100.0, 40.0);
    let wall_id = layout
        .add_object(
            ObjectType::Wall,
            0.0,
            20.0,
            100.0,
            10.0,
            0.0,
            Metadata::new(),
            None,
        )
        .unwrap()
        .id;
    let wall = layout.get_object(wall_id).unwrap();
    let rect = officelayout::occupied_rect(wall);
    assert_eq!(rect, officelayout::Rect::new(0.0, 15.0, 100.0, 10.0));

    let desk_id = layout
        .add_object(ObjectType::Desk, 10.0, 14.0, 10.0, 10.0, 0.0, Metadata::new(), None)
        .unwrap()
        .id;

    let errors = validate(&layout);
    assert!(errors
        .iter()
        .any(|e| e.kind == ValidationKind::Collision && e.object_ids == vec![wall_id, desk_id]));
}

#[test]
fn scenario_wall_wall_overlap_ignored() {
    let mut layout = Layout::new(200.0, 200.0);
    layout
        .add_object(
            ObjectType::Wall,
            0.0,
            50.0,
            100.0,
            10.0,
            0.0,
            Metadata::new(),
            None,
        )
        .unwrap();
    layout
        .add_object(
            ObjectType::Wall,
            50.0,
            0.0,
            10.0,
            100.0,
            0.0,
            Metadata::new(),
            None,
        )
        .unwrap();

    let errors = validate(&layout);
    assert!(!errors.iter().any(|e| e.kind == ValidationKind::Collision));
}

#[test]
fn scenario_no_path_then_door_opens_it() {
    let mut layout = Layout::with_grid_size(100.0, 40.0, 10.0);
    layout
        .add_object(
            ObjectType::Wall,
            50.0,
            0.0,
            10.0,
            40.0,
            0.0,
            Metadata::new(),
            None,
        )
        .unwrap();
    layout
        .add_object(ObjectType::Desk, 10.0, 10.0, 10.0, 10.0, 0.0, Metadata::new(), None)
        .unwrap();
    layout.exit_points.push(Point::new(90.0, 20.0));

    let path = find_shortest_path_to_exit(&layout, Point::new(15.0, 15.0), None);
    assert!(path.is_none());

    layout
        .add_object(
            ObjectType::Door,
            45.0,
            15.0,
            10.0,
            10.0,
            0.0,
            Metadata::new(),
            None,
        )
        .unwrap();

    let path = find_shortest_path_to_exit(&layout, Point::new(15.0, 15.0), None).unwrap();
    let last = *path.last().unwrap();
    assert!((last.x - 90.0).abs() < 1e-6 && (last.y - 20.0).abs() < 1e-6);
}

#[test]
fn scenario_move_rollback() {
    let mut layout = Layout::new(200.0, 200.0);
    let a = layout
        .add_object(ObjectType::Desk, 0.0, 0.0, 10.0, 10.0, 0.0, Metadata::new(), None)
        .unwrap()
        .id;
    layout
        .add_object(ObjectType::Desk, 40.0, 10.0, 10.0, 10.0, 0.0, Metadata::new(), None)
        .unwrap();

    let (ok, reason) = layout.try_move(a, 38.0, 10.0);
    assert!(!ok);
    assert_eq!(reason, officelayout::PlacementReason::Collision);

    let a_obj = layout.get_object(a).unwrap();
    assert_eq!((a_obj.x, a_obj.y), (0.0, 0.0));
}

#[test]
fn scenario_round_trip() {
    let mut layout = Layout::with_grid_size(300.0, 200.0, 40.0);
    layout
        .add_object(
            ObjectType::Desk,
            10.0,
            10.0,
            120.0,
            60.0,
            0.0,
            Metadata::new(),
            Some(7),
        )
        .unwrap();
    layout
        .add_object(ObjectType::Chair, 150.0, 10.0, 40.0, 40.0, 0.0, Metadata::new(), None)
        .unwrap();
    layout.exit_points.push(Point::new(290.0, 100.0));

    let value = officelayout::to_serializable(&layout);
    let reloaded = officelayout::from_serializable(&value).unwrap();

    assert_eq!(layout, reloaded);
    assert!(reloaded.next_id() >= 8);
}
