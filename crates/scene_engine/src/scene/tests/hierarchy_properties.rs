//! Tree invariants checked over every pair of nodes in a small forest

use crate::foundation::collections::NodeId;
use crate::foundation::math::Vec2;
use crate::scene::{Pivot, Scene};
use approx::assert_relative_eq;

/// Two trees: a -> (b -> d, c) and e -> f
fn forest() -> (Scene, Vec<NodeId>) {
    let mut scene = Scene::default();
    let ids: Vec<_> = ["a", "b", "c", "d", "e", "f"]
        .iter()
        .map(|name| scene.spawn(*name, Pivot))
        .collect();
    let [a, b, c, d, e, f] = [ids[0], ids[1], ids[2], ids[3], ids[4], ids[5]];
    scene.add_child(a, b).unwrap();
    scene.add_child(a, c).unwrap();
    scene.add_child(b, d).unwrap();
    scene.add_child(e, f).unwrap();
    (scene, ids)
}

fn assert_links_consistent(scene: &Scene, ids: &[NodeId]) {
    for &id in ids {
        if let Some(parent) = scene.parent(id).unwrap() {
            let count = scene.children(parent).unwrap().iter().filter(|&&c| c == id).count();
            assert_eq!(count, 1, "{id:?} must appear exactly once under its parent");
        }
        for &child in scene.children(id).unwrap() {
            assert_eq!(scene.parent(child).unwrap(), Some(id));
        }
    }
}

#[test]
fn test_attach_detach_for_all_pairs() {
    let (_, ids) = forest();
    for &target in &ids {
        for &child in &ids {
            let (mut scene, ids) = forest();
            let was_ancestor = scene.has_child(child, target).unwrap();

            scene.set_parent(child, Some(target)).unwrap();
            assert_links_consistent(&scene, &ids);

            if was_ancestor {
                assert_eq!(scene.parent(child).unwrap(), None);
                assert!(!scene.children(target).unwrap().contains(&child));
            } else {
                assert_eq!(scene.parent(child).unwrap(), Some(target));
                let count = scene.children(target).unwrap().iter().filter(|&&c| c == child).count();
                assert_eq!(count, 1);

                scene.set_parent(child, None).unwrap();
                assert!(!scene.children(target).unwrap().contains(&child));
                assert_links_consistent(&scene, &ids);
            }
        }
    }
}

#[test]
fn test_cycle_attempt_leaves_rest_of_tree_unchanged() {
    let (_, ids) = forest();
    for &ancestor in &ids {
        for &descendant in &ids {
            let (mut scene, ids) = forest();
            if ancestor == descendant || !scene.has_child(ancestor, descendant).unwrap() {
                continue;
            }
            let before: Vec<_> = ids
                .iter()
                .filter(|&&id| id != ancestor)
                .map(|&id| (id, scene.children(id).unwrap().to_vec()))
                .collect();

            scene.set_parent(ancestor, Some(descendant)).unwrap();

            assert!(!scene.children(descendant).unwrap().contains(&ancestor));
            for (id, children) in before {
                let now: Vec<_> = scene.children(id).unwrap().iter().copied().filter(|&c| c != ancestor).collect();
                let was: Vec<_> = children.into_iter().filter(|&c| c != ancestor).collect();
                assert_eq!(now, was);
            }
            assert!(scene.has_child(ancestor, descendant).unwrap());
        }
    }
}

#[test]
fn test_index_after_add_child_at_is_clamped() {
    for index in -3_isize..8 {
        let mut scene = Scene::default();
        let parent = scene.spawn("parent", Pivot);
        for i in 0..4 {
            let kid = scene.spawn(format!("kid{i}"), Pivot);
            scene.add_child(parent, kid).unwrap();
        }
        let child = scene.spawn("child", Pivot);

        scene.add_child_at(parent, child, index).unwrap();

        let len = scene.children(parent).unwrap().len() as isize;
        let expected = index.clamp(0, len - 1) as usize;
        assert_eq!(scene.index(child).unwrap(), Some(expected));
    }
}

#[test]
fn test_index_tracks_reordering_of_siblings() {
    let (mut scene, ids) = forest();
    let [a, b, c] = [ids[0], ids[1], ids[2]];

    assert_eq!(scene.index(b).unwrap(), Some(0));
    assert_eq!(scene.index(c).unwrap(), Some(1));

    scene.set_child_index(a, c, 0).unwrap();
    assert_eq!(scene.index(c).unwrap(), Some(0));
    assert_eq!(scene.index(b).unwrap(), Some(1));

    scene.remove_child(a, c).unwrap();
    assert_eq!(scene.index(c).unwrap(), None);
    assert_eq!(scene.index(b).unwrap(), Some(0));
}

#[test]
fn test_world_roundtrip_at_every_depth() {
    let (mut scene, ids) = forest();
    for (i, &id) in ids.iter().enumerate() {
        let t = scene.node_mut(id).unwrap().transform_mut();
        t.set_xy(i as f32 * 3.0, -(i as f32));
        t.rotation = 17.0 * i as f32;
        t.set_scale(1.0 + 0.25 * i as f32, 1.5);
    }

    let p = Vec2::new(4.0, -9.0);
    for &id in &ids {
        let local = scene.inverse_transform_point(id, p).unwrap();
        assert_relative_eq!(scene.transform_point(id, local).unwrap(), p, epsilon = 1e-3);
    }
}
