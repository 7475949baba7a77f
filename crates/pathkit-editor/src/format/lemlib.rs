//! LemLib v0.4 path files (inches, byte-voltage speeds).
//!
//! Layout: one `x, y, speed` line per sampled point, `endData`, three
//! parameter lines (deceleration, max speed, multiplier), then one line of
//! eight numbers per cubic segment. Only max speed is read back.

use super::{Format, DATA_MARKER};
use crate::model::{Control, GeneralConfig, PathConfig, PathId, PathStore, SegmentId};
use crate::sampling::PathSampler;
use crate::serialization::PathFileData;
use pathkit_core::units::to_user;
use pathkit_core::{FormatError, UnitConverter, UnitOfLength, Vector};

/// Distance the ghost point is placed beyond the end of the path, in inches.
const GHOST_POINT_DISTANCE: f64 = 20.0;

/// Parameter written for fields the editor does not model.
const UNSUPPORTED_PARAMETER: u32 = 200;

#[derive(Debug, Clone, Copy, Default)]
pub struct LemLibFormatV0_4;

impl LemLibFormatV0_4 {
    pub fn new() -> Self {
        Self
    }
}

fn num(value: f64) -> String {
    let value = to_user(value);
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

fn parse_segment_line(line: &str, line_number: usize) -> Result<[f64; 8], FormatError> {
    let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
    if tokens.len() != 8 {
        return Err(FormatError::InvalidSegment { line_number });
    }
    let mut values = [0.0; 8];
    for (value, token) in values.iter_mut().zip(&tokens) {
        *value = token
            .parse::<f64>()
            .map_err(|_| FormatError::InvalidSegment { line_number })?;
    }
    Ok(values)
}

impl Format for LemLibFormatV0_4 {
    fn name(&self) -> &'static str {
        "LemLib v0.4.x (inch, byte-voltage)"
    }

    fn build_path_config(&self) -> PathConfig {
        PathConfig::default()
    }

    fn recover_path_file_data(&self, content: &str) -> Result<PathFileData, FormatError> {
        let lines: Vec<&str> = content.split('\n').map(|l| l.trim_end_matches('\r')).collect();
        let end = lines
            .iter()
            .position(|l| l.trim() == "endData")
            .ok_or(FormatError::MissingEndData)?;
        let max_speed: f64 = lines
            .get(end + 2)
            .and_then(|l| l.trim().parse().ok())
            .ok_or(FormatError::InvalidMaxSpeed)?;

        let mut store = PathStore::new();
        let mut path: Option<PathId> = None;
        for (idx, line) in lines.iter().enumerate().skip(end + 4) {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line_number = idx + 1;
            let v = parse_segment_line(line, line_number)?;
            let p1 = Vector::new(v[0], v[1]);
            let handles = [Control::new(v[2], v[3]), Control::new(v[4], v[5])];
            let p4 = Control::end(v[6], v[7], 0.0);

            let segment: SegmentId = match path {
                None => {
                    let mut controls = vec![Control::end_at(p1, 0.0)];
                    controls.extend(handles);
                    controls.push(p4);
                    store.create_segment_from(controls)?
                }
                Some(path) => {
                    let last = store
                        .path(path)
                        .last_segment()
                        .map(|s| store.segment(s).last())
                        .ok_or(FormatError::InvalidSegment { line_number })?;
                    if store.position(last) != p1 {
                        return Err(FormatError::InvalidSegment { line_number });
                    }
                    let mut ids = vec![last];
                    ids.extend(handles.into_iter().map(|c| store.add_control(c)));
                    ids.push(store.add_control(p4));
                    store.create_segment(ids)?
                }
            };

            match path {
                None => {
                    let mut pc = self.build_path_config();
                    pc.speed_limit.to = pc.speed_limit.clamp(to_user(max_speed));
                    path = Some(store.add_path(pc, vec![segment])?);
                }
                Some(path) => store.append_segment(path, segment)?,
            }
        }

        tracing::info!(
            "Recovered {} segment(s) from LemLib data",
            path.map_or(0, |p| store.path(p).segments().len())
        );
        Ok(PathFileData::from_store(&store, &self.default_general_config()))
    }

    fn export_path_file(
        &self,
        store: &PathStore,
        gc: &GeneralConfig,
        path: Option<PathId>,
        sampler: &dyn PathSampler,
    ) -> Result<String, FormatError> {
        let path = path.ok_or(FormatError::NoPath)?;
        let path_ref = store.path(path);
        if path_ref.segments().is_empty() {
            return Err(FormatError::NoSegment);
        }

        let uc = UnitConverter::new(gc.uol, UnitOfLength::Inch);
        let mut lines: Vec<String> = Vec::new();

        let points = sampler.sample(store, path, gc.point_density).points;
        for point in &points {
            lines.push(format!(
                "{}, {}, {}",
                num(uc.from_a_to_b(point.x)),
                num(uc.from_a_to_b(point.y)),
                num(point.speed)
            ));
        }

        if let [.., last2, last1] = points.as_slice() {
            let (a, b) = (last2.position(), last1.position());
            let ghost = a.interpolate(b, a.distance(b) + uc.from_b_to_a(GHOST_POINT_DISTANCE));
            lines.push(format!(
                "{}, {}, 0",
                num(uc.from_a_to_b(ghost.x)),
                num(uc.from_a_to_b(ghost.y))
            ));
        }

        lines.push("endData".to_string());
        lines.push(UNSUPPORTED_PARAMETER.to_string());
        lines.push(path_ref.pc.speed_limit.to.to_string());
        lines.push(UNSUPPORTED_PARAMETER.to_string());

        for segment in path_ref.segments() {
            let pts = store.segment_points(*segment);
            let pts = match pts.len() {
                4 => pts,
                2 => {
                    let center = pts[0].midpoint(pts[1]);
                    vec![pts[0], center, center, pts[1]]
                }
                _ => {
                    tracing::warn!(
                        "Skipping quintic segment {} in LemLib export",
                        store.segment(*segment).uid
                    );
                    continue;
                }
            };
            let fields: Vec<String> = pts
                .iter()
                .flat_map(|p| [num(uc.from_a_to_b(p.x)), num(uc.from_a_to_b(p.y))])
                .collect();
            lines.push(fields.join(", "));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        let data = PathFileData::from_store(store, gc);
        out.push_str(DATA_MARKER);
        out.push_str(&data.to_json()?);
        Ok(out)
    }
}
