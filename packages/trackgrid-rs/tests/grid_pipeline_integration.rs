use trackgrid_rs::{parse_grid, store, MatrixStore, StatMetadata};

/// Build grid text the way 3dTrackID writes it: preamble comments, ROI label
/// and index rows, then one named square matrix per non-derived statistic.
fn grid_text(n_rois: usize) -> String {
    let names: Vec<&'static str> = StatMetadata::all()
        .filter(|s| !s.derived)
        .map(|s| s.name)
        .collect();

    let mut text = String::new();
    text.push_str(&format!("# {}          # Number of network ROIs\n", n_rois));
    text.push_str(&format!(
        "# {}          # Number of grid matrices\n",
        names.len()
    ));
    text.push_str("# WITH_ROI_LABELS\n");

    let labels: Vec<String> = (1..=n_rois).map(|i| format!("roi_{:02}", i)).collect();
    text.push_str(&format!("{}\n", labels.join("   ")));
    let indices: Vec<String> = (1..=n_rois).map(|i| i.to_string()).collect();
    text.push_str(&format!("{}\n", indices.join("   ")));

    for (m, name) in names.iter().enumerate() {
        text.push_str(&format!("# {}\n", name));
        for r in 0..n_rois {
            let row: Vec<String> = (0..n_rois)
                .map(|c| format!("{}", cell_value(m, r, c)))
                .collect();
            text.push_str(&format!("{}\n", row.join("   ")));
        }
    }
    text
}

fn cell_value(matrix: usize, row: usize, col: usize) -> f64 {
    (matrix * 100 + row * 10 + col) as f64 / 4.0
}

#[test]
fn test_parse_full_grid() {
    let grid = parse_grid(&grid_text(4)).unwrap();

    assert_eq!(grid.len(), 18);
    assert_eq!(grid.n_rois(), 4);
    assert_eq!(grid.names[0], "NT");
    assert_eq!(grid.names[17], "sRD");
    assert_eq!(grid.roi_labels[0], "roi_01");
    assert_eq!(grid.roi_labels[3], "roi_04");

    // Spot-check values across matrices to confirm reshape order
    assert_eq!(grid.matrices[0].get(0, 0), cell_value(0, 0, 0));
    assert_eq!(grid.matrices[0].get(2, 3), cell_value(0, 2, 3));
    assert_eq!(grid.matrices[5].get(1, 1), cell_value(5, 1, 1));
    assert_eq!(grid.matrices[17].get(3, 0), cell_value(17, 3, 0));
}

#[test]
fn test_grid_to_store_with_derived_matrix() {
    let grid = parse_grid(&grid_text(3)).unwrap();
    let mut data = MatrixStore::from_grid(&grid).unwrap();
    data.augment_binary().unwrap();

    assert_eq!(data.len(), 19);
    let names = data.names();
    assert_eq!(names[0], "NT");
    assert_eq!(*names.last().unwrap(), "SC_bin");

    // NT(0,0) is 0 in the generated grid, every other NT cell is positive
    let sc = data.get("SC_bin").unwrap();
    assert_eq!(sc.get(0, 0), 0.0);
    assert_eq!(sc.get(0, 1), 1.0);
    assert_eq!(sc.get(2, 2), 1.0);
}

#[test]
fn test_store_survives_disk_roundtrip() {
    let grid = parse_grid(&grid_text(4)).unwrap();
    let mut data = MatrixStore::from_grid(&grid).unwrap();
    data.augment_binary().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(store::STORE_FILENAME);
    data.save(&path).unwrap();

    let loaded = MatrixStore::load(&path).unwrap();
    assert_eq!(loaded, data);
}

#[test]
fn test_export_every_statistic() {
    let grid = parse_grid(&grid_text(3)).unwrap();
    let mut data = MatrixStore::from_grid(&grid).unwrap();
    data.augment_binary().unwrap();

    let dir = tempfile::tempdir().unwrap();
    for stat in StatMetadata::all() {
        let path = data.export_csv(stat.name, dir.path()).unwrap();
        assert!(path.is_file(), "missing export for {}", stat.name);
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), format!("{}.csv", stat.name));
    }
}

#[test]
fn test_exported_csv_shape_and_formats() {
    let grid = parse_grid(&grid_text(3)).unwrap();
    let mut data = MatrixStore::from_grid(&grid).unwrap();
    data.augment_binary().unwrap();
    let dir = tempfile::tempdir().unwrap();

    // BL exports with two decimals and a zeroed diagonal
    let bl = data.export_csv("BL", dir.path()).unwrap();
    let content = std::fs::read_to_string(&bl).unwrap();
    let rows: Vec<&str> = content.lines().collect();
    assert_eq!(rows.len(), 3);
    for (r, row) in rows.iter().enumerate() {
        let cells: Vec<&str> = row.split(',').collect();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[r], "0.00");
        for cell in &cells {
            let dot = cell.find('.').unwrap();
            assert_eq!(cell.len() - dot - 1, 2, "cell '{}' is not 2dp", cell);
        }
    }

    // SC_bin exports bare integers
    let sc = data.export_csv("SC_bin", dir.path()).unwrap();
    let content = std::fs::read_to_string(&sc).unwrap();
    for row in content.lines() {
        for cell in row.split(',') {
            assert!(cell == "0" || cell == "1", "unexpected SC_bin cell '{}'", cell);
        }
    }
}

#[test]
fn test_roi_labels_written_alongside_store() {
    let grid = parse_grid(&grid_text(3)).unwrap();
    let dir = tempfile::tempdir().unwrap();

    let path = store::write_roi_labels(dir.path(), &grid.roi_labels).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "roi_01\nroi_02\nroi_03\n");
}

#[test]
fn test_truncated_grid_is_rejected() {
    let text = grid_text(3);
    // Drop the final matrix row so the body no longer divides evenly
    let truncated = text.trim_end().rsplit_once('\n').unwrap().0;
    assert!(parse_grid(truncated).is_err());
}
