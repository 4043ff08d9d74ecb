use std::path::Path;

use polymesh_import::io::cells::parse_cell0ds;
use polymesh_import::topology::markers::MarkerIndex;
use polymesh_import::topology::polygonal_mesh::PolygonalMesh;
use proptest::prelude::*;

fn points_table(markers: &[u32]) -> String {
    let mut text = String::from("Id;Marker;X;Y\n");
    for (id, marker) in markers.iter().enumerate() {
        text.push_str(&format!("{id};{marker};{id}.5;-{id}.25\n"));
    }
    text
}

proptest! {
    #[test]
    fn prop_zero_marker_never_indexed(markers in prop::collection::vec(0u32..4, 1..40)) {
        let records = parse_cell0ds(Path::new("Cell0Ds.csv"), &points_table(&markers)).unwrap();
        let mut mesh = PolygonalMesh::new();
        mesh.extend_cell0ds(records);

        prop_assert_eq!(mesh.number_cell0d(), markers.len());
        prop_assert!(mesh.cell0d_markers().markers().all(|m| m != 0));
        let tagged = markers.iter().filter(|&&m| m != 0).count();
        prop_assert_eq!(mesh.cell0d_markers().tagged_count(), tagged);
    }

    #[test]
    fn prop_buckets_preserve_insertion_order(pairs in prop::collection::vec((1u32..5, 0u32..1000), 0..60)) {
        let mut index = MarkerIndex::new();
        for &(marker, id) in &pairs {
            index.insert(marker, id);
        }
        for marker in index.markers() {
            let expected: Vec<u32> = pairs
                .iter()
                .filter(|(m, _)| *m == marker)
                .map(|&(_, id)| id)
                .collect();
            prop_assert_eq!(index.ids(marker), expected.as_slice());
        }
    }
}
