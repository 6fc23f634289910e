use kdplane::{KdError, KdTree, Point, Rectangle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// 均匀随机点
fn random_points(rng: &mut StdRng, count: usize) -> Vec<Point> {
    (0..count)
        .map(|_| Point::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect()
}

/// 网格上的点：大量重复点和同轴相等的坐标
fn grid_points(rng: &mut StdRng, count: usize) -> Vec<Point> {
    (0..count)
        .map(|_| {
            let x = rng.gen_range(0..=10) as f64 / 10.0;
            let y = rng.gen_range(0..=10) as f64 / 10.0;
            Point::new(x, y)
        })
        .collect()
}

fn random_rect(rng: &mut StdRng) -> Rectangle {
    let (x1, x2) = (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0));
    let (y1, y2) = (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0));
    Rectangle::new(f64::min(x1, x2), f64::min(y1, y2), f64::max(x1, x2), f64::max(y1, y2)).unwrap()
}

fn datasets() -> Vec<Vec<Point>> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut sets = Vec::new();
    for size in [0, 1, 2, 10, 100, 1000] {
        sets.push(random_points(&mut rng, size));
        sets.push(grid_points(&mut rng, size));
    }
    sets
}

#[test]
fn test_size_counts_distinct_points() {
    for points in datasets() {
        let tree: KdTree = points.iter().copied().collect();
        let distinct: HashSet<Point> = points.iter().copied().collect();

        assert_eq!(tree.len(), distinct.len());
        assert_eq!(tree.is_empty(), distinct.is_empty());
        tree.validate_partition().unwrap();
    }
}

#[test]
fn test_contains_after_every_insert() {
    let mut rng = StdRng::seed_from_u64(7);
    let points = grid_points(&mut rng, 300);

    let mut tree = KdTree::new();
    for (i, p) in points.iter().enumerate() {
        tree.insert(*p);
        assert!(tree.contains(p));
        // 之前插入的点仍然存在
        for earlier in &points[..i] {
            assert!(tree.contains(earlier));
        }
    }
}

#[test]
fn test_contains_rejects_absent_points() {
    let mut rng = StdRng::seed_from_u64(11);
    let points = random_points(&mut rng, 500);
    let tree: KdTree = points.iter().copied().collect();
    let stored: HashSet<Point> = points.iter().copied().collect();

    for q in random_points(&mut rng, 500) {
        assert_eq!(tree.contains(&q), stored.contains(&q));
    }
}

#[test]
fn test_empty_tree_queries() {
    let mut rng = StdRng::seed_from_u64(3);
    let tree = KdTree::new();

    for q in random_points(&mut rng, 50) {
        assert!(!tree.contains(&q));
        assert_eq!(tree.nearest(&q), None);
    }
    assert_eq!(tree.range(&Rectangle::unit()).count(), 0);
}

#[test]
fn test_range_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(1234);

    for points in datasets() {
        let tree: KdTree = points.iter().copied().collect();
        let stored: HashSet<Point> = points.iter().copied().collect();

        for _ in 0..50 {
            let query = random_rect(&mut rng);

            let mut found: Vec<Point> = tree.range(&query).collect();
            found.sort();
            let mut expected: Vec<Point> = stored.iter().copied().filter(|p| query.contains(p)).collect();
            expected.sort();

            assert_eq!(found, expected, "query {}", query);
        }

        // 网格线上的查询矩形，边界上的点都应被包含
        let edge = Rectangle::new(0.2, 0.3, 0.6, 0.3).unwrap();
        let found: HashSet<Point> = tree.range(&edge).collect();
        let expected: HashSet<Point> = stored.iter().copied().filter(|p| edge.contains(p)).collect();
        assert_eq!(found, expected);
    }
}

#[test]
fn test_nearest_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(99);

    for points in datasets() {
        if points.is_empty() {
            continue;
        }
        let tree: KdTree = points.iter().copied().collect();

        let mut queries = random_points(&mut rng, 50);
        queries.extend(grid_points(&mut rng, 20));
        for q in queries {
            let found = tree.nearest(&q).unwrap();
            let best = points
                .iter()
                .map(|p| p.distance_squared_to(&q))
                .fold(f64::INFINITY, f64::min);

            assert!(tree.contains(&found));
            assert_eq!(found.distance_squared_to(&q), best, "query {}", q);
        }
    }
}

#[test]
fn test_queries_are_idempotent() {
    let mut rng = StdRng::seed_from_u64(5);
    let tree: KdTree = grid_points(&mut rng, 200).into_iter().collect();

    for _ in 0..20 {
        let query = random_rect(&mut rng);
        let first: Vec<Point> = tree.range(&query).collect();
        let second: Vec<Point> = tree.range(&query).collect();
        assert_eq!(first, second);

        let q = Point::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0));
        assert_eq!(tree.nearest(&q), tree.nearest(&q));
    }
}

#[test]
fn test_scenario_range() {
    let mut tree = KdTree::new();
    tree.insert(Point::new(0.0, 0.0));
    tree.insert(Point::new(0.3, 0.3));
    tree.insert(Point::new(0.3, 0.5));

    let query = Rectangle::new(0.2, 0.3, 0.3, 0.5).unwrap();
    let found: HashSet<Point> = tree.range(&query).collect();
    let expected: HashSet<Point> = [Point::new(0.3, 0.3), Point::new(0.3, 0.5)].into_iter().collect();
    assert_eq!(found, expected);
}

#[test]
fn test_scenario_nearest() {
    let mut tree = KdTree::new();
    tree.insert(Point::new(0.5, 1.0));
    tree.insert(Point::new(0.2, 0.2));

    assert_eq!(tree.nearest(&Point::new(0.1, 0.3)), Some(Point::new(0.2, 0.2)));
}

#[test]
fn test_scenario_duplicate_insert() {
    let mut tree = KdTree::new();
    tree.insert(Point::new(0.1, 0.1));
    tree.insert(Point::new(0.1, 0.1));

    assert_eq!(tree.len(), 1);
}

#[test]
fn test_scenario_rectangles() {
    let a = Rectangle::new(1.0, 1.0, 4.0, 4.0).unwrap();
    let corner = Rectangle::new(4.0, 4.0, 5.0, 5.0).unwrap();
    assert!(a.intersects(&corner));

    let b = Rectangle::new(2.0, 2.0, 4.0, 4.0).unwrap();
    let apart = Rectangle::new(0.0, 0.0, 1.0, 1.0).unwrap();
    assert!(!b.intersects(&apart));

    assert!(matches!(
        Rectangle::new(3.0, 0.0, 1.0, 1.0),
        Err(KdError::InvalidGeometry { .. })
    ));
}

#[test]
fn test_sorted_insertion_degenerates_but_stays_correct() {
    let points: Vec<Point> = (0..2000).map(|i| Point::new(i as f64 / 2000.0, i as f64 / 2000.0)).collect();
    let tree: KdTree = points.iter().copied().collect();

    assert_eq!(tree.len(), 2000);
    assert_eq!(tree.depth(), 2000);
    tree.validate_partition().unwrap();

    let query = Rectangle::new(0.25, 0.25, 0.5, 0.5).unwrap();
    assert_eq!(tree.range(&query).count(), 501);
    assert!(tree.contains(&Point::new(0.5, 0.5)));
}

#[test]
fn test_export_round_trips_through_json() {
    let mut rng = StdRng::seed_from_u64(8);
    let tree: KdTree = random_points(&mut rng, 20).into_iter().collect();

    let json = tree.export_to_json(false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["size"], 20);
    assert_eq!(value["root"]["rect"]["min"][0], 0.0);
    assert_eq!(value["root"]["rect"]["max"][1], 1.0);
}
