use crate::support::{assert_chained, build_path, points_of, single_segment};
use pathkit_core::FormatError;
use pathkit_editor::format::{import_path_file, Format, LemLibFormatV0_4, DATA_MARKER};
use pathkit_editor::model::{GeneralConfig, PathStore};
use pathkit_editor::sampling::{UniformSampler, MAX_SAMPLES_PER_SEGMENT};

const ONE_SEGMENT: &str = "0, 0, 90\n30, 10, 0\nendData\n200\n90\n200\n0,0,10,0,20,10,30,10\n";

fn recover(content: &str) -> Result<PathStore, FormatError> {
    let data = LemLibFormatV0_4::new().recover_path_file_data(content)?;
    Ok(data.build_store()?)
}

fn export(store: &PathStore) -> String {
    let path = store.paths().first().copied();
    LemLibFormatV0_4::new()
        .export_path_file(store, &GeneralConfig::default(), path, &UniformSampler)
        .unwrap()
}

#[test]
fn test_recover_single_cubic_segment() {
    let store = recover(ONE_SEGMENT).unwrap();
    assert_eq!(store.paths().len(), 1);
    let path = store.path(store.paths()[0]);
    assert_eq!(path.segments().len(), 1);
    assert_eq!(
        points_of(&store, path.segments()[0]),
        vec![(0.0, 0.0), (10.0, 0.0), (20.0, 10.0), (30.0, 10.0)]
    );
    assert_eq!(path.pc.speed_limit.to, 90.0);
}

#[test]
fn test_recover_clamps_max_speed() {
    let content = ONE_SEGMENT.replace("\n90\n", "\n200\n");
    let store = recover(&content).unwrap();
    let path = store.path(store.paths()[0]);
    assert_eq!(path.pc.speed_limit.to, 127.0);
}

#[test]
fn test_recover_chains_segments_into_one_path() {
    let content = format!("{}30,10,40,10,50,10,60,10\n", ONE_SEGMENT);
    let store = recover(&content).unwrap();
    assert_eq!(store.paths().len(), 1);
    let path = store.paths()[0];
    assert_eq!(store.path(path).segments().len(), 2);
    assert_chained(&store, path);
}

#[test]
fn test_recover_skips_blank_and_comment_lines() {
    let content = format!("{}\n# a comment\n\n30,10,40,10,50,10,60,10\n", ONE_SEGMENT);
    let store = recover(&content).unwrap();
    let path = store.paths()[0];
    assert_eq!(store.path(path).segments().len(), 2);
}

#[test]
fn test_recover_accepts_crlf_line_endings() {
    let content = ONE_SEGMENT.replace('\n', "\r\n");
    let store = recover(&content).unwrap();
    assert_eq!(store.path(store.paths()[0]).pc.speed_limit.to, 90.0);
}

#[test]
fn test_recover_without_end_data() {
    let result = recover("0, 0, 90\n30, 10, 0\n");
    assert!(matches!(result, Err(FormatError::MissingEndData)));
}

#[test]
fn test_recover_with_bad_max_speed() {
    let content = ONE_SEGMENT.replace("\n90\n", "\nfast\n");
    assert!(matches!(recover(&content), Err(FormatError::InvalidMaxSpeed)));
}

#[test]
fn test_recover_rejects_disconnected_segment() {
    let content = format!("{}31,10,40,10,50,10,60,10\n", ONE_SEGMENT);
    assert!(matches!(
        recover(&content),
        Err(FormatError::InvalidSegment { line_number: 8 })
    ));
}

#[test]
fn test_recover_rejects_malformed_segment() {
    let content = ONE_SEGMENT.replace("0,0,10,0,20,10,30,10", "0,0,10,0,20");
    assert!(matches!(
        recover(&content),
        Err(FormatError::InvalidSegment { line_number: 7 })
    ));
}

#[test]
fn test_export_linear_segment() {
    let mut store = PathStore::new();
    single_segment(&mut store, &[(0.0, 0.0), (10.0, 0.0)]);

    let output = export(&store);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(
        &lines[..7],
        &[
            "0, 0, 100",
            "2, 0, 100",
            "4, 0, 100",
            "6, 0, 100",
            "8, 0, 100",
            "10, 0, 100",
            "30, 0, 0",
        ]
    );
    assert_eq!(&lines[7..12], &["endData", "200", "100", "200", "0, 0, 5, 0, 5, 0, 10, 0"]);
    assert!(lines[12].starts_with(DATA_MARKER));
    assert_eq!(lines.len(), 13);
}

#[test]
fn test_export_with_tiny_density_is_bounded() {
    let mut store = PathStore::new();
    single_segment(&mut store, &[(0.0, 0.0), (10.0, 0.0)]);
    let gc = GeneralConfig {
        point_density: 1e-12,
        ..GeneralConfig::default()
    };

    let path = store.paths().first().copied();
    let output = LemLibFormatV0_4::new()
        .export_path_file(&store, &gc, path, &UniformSampler)
        .unwrap();
    let end = output.lines().position(|l| l == "endData").unwrap();
    // sampled points, the end point and the ghost point
    assert_eq!(end, MAX_SAMPLES_PER_SEGMENT + 2);
}

#[test]
fn test_export_cubic_segment_line() {
    let mut store = PathStore::new();
    single_segment(&mut store, &[(0.0, 0.0), (10.0, 0.0), (20.0, 10.0), (30.0, 10.0)]);

    let output = export(&store);
    assert!(output.lines().any(|l| l == "0, 0, 10, 0, 20, 10, 30, 10"));
}

#[test]
fn test_export_skips_quintic_segments() {
    let mut store = PathStore::new();
    build_path(
        &mut store,
        &[
            &[(0.0, 0.0), (10.0, 0.0)],
            &[(10.0, 0.0), (12.0, 0.0), (14.0, 0.0), (16.0, 0.0), (18.0, 0.0), (20.0, 0.0)],
        ],
    );

    let output = export(&store);
    let lines: Vec<&str> = output.lines().collect();
    let end = lines.iter().position(|l| *l == "endData").unwrap();
    let segment_lines: Vec<&str> = lines[end + 4..]
        .iter()
        .copied()
        .filter(|l| !l.starts_with(DATA_MARKER))
        .collect();
    assert_eq!(segment_lines, vec!["0, 0, 5, 0, 5, 0, 10, 0"]);
}

#[test]
fn test_export_without_path() {
    let store = PathStore::new();
    let result = LemLibFormatV0_4::new().export_path_file(
        &store,
        &GeneralConfig::default(),
        None,
        &UniformSampler,
    );
    assert!(matches!(result, Err(FormatError::NoPath)));
}

#[test]
fn test_export_path_without_segments() {
    let mut store = PathStore::new();
    let path = store.add_path(Default::default(), Vec::new()).unwrap();
    let result = LemLibFormatV0_4::new().export_path_file(
        &store,
        &GeneralConfig::default(),
        Some(path),
        &UniformSampler,
    );
    assert!(matches!(result, Err(FormatError::NoSegment)));
}

#[test]
fn test_import_prefers_embedded_data() {
    let mut store = PathStore::new();
    build_path(
        &mut store,
        &[
            &[(0.0, 0.0), (10.0, 0.0)],
            &[(10.0, 0.0), (12.0, 0.0), (14.0, 0.0), (16.0, 0.0), (18.0, 0.0), (20.0, 0.0)],
        ],
    );
    let uid = store.path(store.paths()[0]).uid.clone();

    let output = export(&store);
    let data = import_path_file(&LemLibFormatV0_4::new(), &output).unwrap();

    // The quintic segment only survives through the embedded data.
    assert_eq!(data.paths.len(), 1);
    assert_eq!(data.paths[0].uid, uid);
    assert_eq!(data.paths[0].segments.len(), 2);
    assert_eq!(data.paths[0].segments[1].controls.len(), 6);
}

#[test]
fn test_import_without_embedded_data_recovers() {
    let data = import_path_file(&LemLibFormatV0_4::new(), ONE_SEGMENT).unwrap();
    assert_eq!(data.paths.len(), 1);
    assert_eq!(data.paths[0].segments[0].controls.len(), 4);
}
