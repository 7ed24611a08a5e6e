//! Invariants that hold for any input.

use hclust::{ClusterTree, HierarchicalClustering, Linkage, Options};
use test_case::test_case;

mod common;

/// Every internal node's size is the sum of its children's.
fn check_sizes<I>(node: &ClusterTree<I>) -> usize {
    match node.children() {
        None => {
            assert_eq!(node.size(), 1);
            1
        }
        Some((left, right)) => {
            let size = check_sizes(left) + check_sizes(right);
            assert_eq!(node.size(), size);
            size
        }
    }
}

#[test_case(2, 3, Linkage::Complete)]
#[test_case(20, 2, Linkage::Single)]
#[test_case(100, 10, Linkage::Complete)]
#[test_case(250, 5, Linkage::Single)]
fn partition_and_tree(car: usize, dim: usize, linkage: Linkage) {
    let data = common::data_gen::gen_random_data(car, dim, 10.0, 42);
    let options = Options::default().with_linkage(linkage);
    let clustering = HierarchicalClustering::new(data, options).unwrap_or_else(|e| unreachable!("{e}"));

    assert_eq!(clustering.merges().len(), car - 1);

    for k in [1, 2, car / 2, car - 1, car].into_iter().filter(|&k| k >= 1) {
        let clusters = clustering.get_clusters(k).unwrap_or_else(|e| unreachable!("{e}"));
        assert_eq!(clusters.len(), k);
        assert!(clusters.iter().all(|c| !c.is_empty()));

        let mut members = clusters.into_iter().flatten().collect::<Vec<_>>();
        members.sort_unstable();
        assert_eq!(members, (0..car).collect::<Vec<_>>());
    }

    let singletons = clustering.get_clusters(car).unwrap_or_else(|e| unreachable!("{e}"));
    assert_eq!(singletons, (0..car).map(|i| vec![i]).collect::<Vec<_>>());

    let root = clustering.get_tree().unwrap_or_else(|e| unreachable!("{e}"));
    assert_eq!(check_sizes(&root), car);
    let mut leaves = root.leaves();
    assert_eq!(leaves, clustering.get_clusters(1).unwrap_or_else(|e| unreachable!("{e}"))[0]);
    leaves.sort_unstable();
    assert_eq!(leaves, (0..car).collect::<Vec<_>>());
}

#[test_case(50, 4)]
#[test_case(300, 8)]
fn deterministic_and_parallel(car: usize, dim: usize) {
    let data = common::data_gen::gen_random_data(car, dim, 1.0, 7);
    for linkage in Linkage::ALL {
        let options = Options::default().with_linkage(linkage);
        let first = HierarchicalClustering::new(data.clone(), options).unwrap_or_else(|e| unreachable!("{e}"));
        let second = HierarchicalClustering::new(data.clone(), options).unwrap_or_else(|e| unreachable!("{e}"));
        let parallel = HierarchicalClustering::par_new(data.clone(), options).unwrap_or_else(|e| unreachable!("{e}"));

        assert_eq!(first.merges(), second.merges());
        assert_eq!(first.merges(), parallel.merges());
    }
}

#[test]
fn merge_similarities() {
    let data = common::data_gen::gen_random_data(60, 3, 5.0, 11);

    // Under complete linkage, no merge is ever more similar than the first.
    let options = Options::default();
    let clustering = HierarchicalClustering::new(data.clone(), options).unwrap_or_else(|e| unreachable!("{e}"));
    let merges = clustering.merges().as_slice();
    assert!(merges.iter().all(|m| m.similarity <= merges[0].similarity));
    assert!(merges.iter().all(|m| m.similarity > 0.0 && m.similarity <= 1.0));

    // Single and complete linkage agree on the first merge.
    let options = options.with_linkage(Linkage::Single);
    let single = HierarchicalClustering::new(data, options).unwrap_or_else(|e| unreachable!("{e}"));
    assert_eq!(single.merges().as_slice()[0], merges[0]);

    // Single linkage merges are non-increasing in similarity.
    let single = single.merges().as_slice();
    assert!(single.windows(2).all(|w| w[1].similarity <= w[0].similarity));
}

#[test]
fn blobs() {
    let data = common::data_gen::gen_blobs(4, 25, 3, 3);
    for linkage in Linkage::ALL {
        let clustering = HierarchicalClustering::new(data.clone(), Options::default().with_linkage(linkage))
            .unwrap_or_else(|e| unreachable!("{e}"));
        let clusters = clustering.get_clusters(4).unwrap_or_else(|e| unreachable!("{e}"));
        for (b, cluster) in clusters.into_iter().enumerate() {
            let mut cluster = cluster;
            cluster.sort_unstable();
            assert_eq!(cluster, (b * 25..(b + 1) * 25).collect::<Vec<_>>());
        }
    }
}

#[test]
fn ties_on_a_line() {
    // Every neighboring pair is equally similar, so ties are broken by the
    // lowest row.
    let data = common::data_gen::line(5);
    let clustering = HierarchicalClustering::new(data, Options::default()).unwrap_or_else(|e| unreachable!("{e}"));
    assert_eq!(clustering.merges().pairs(), vec![(0, 1), (2, 3), (2, 4), (0, 2)]);

    let options = Options::default().with_linkage(Linkage::Single);
    let data = common::data_gen::line(5);
    let clustering = HierarchicalClustering::new(data, options).unwrap_or_else(|e| unreachable!("{e}"));
    assert_eq!(clustering.merges().pairs(), vec![(0, 1), (0, 2), (0, 3), (0, 4)]);
}
