use std::collections::HashMap;

/// Session-wide point -> ordinal assignments.
///
/// Ordinals come from a point's position in the case-insensitively sorted
/// batch that first mentions it. Later batches never renumber a point, so two
/// points first seen in different batches can end up sharing an ordinal.
#[derive(Debug, Default)]
pub struct OrdinalCache {
    assigned: HashMap<String, u32>,
    /// Highest ordinal handed out since the last clear.
    highest: u32,
}

impl OrdinalCache {
    pub fn assign<S: AsRef<str>>(&mut self, points: &[S]) -> HashMap<String, u32> {
        let mut batch: Vec<&str> = Vec::new();
        for point in points {
            let point = point.as_ref();
            if point.trim().is_empty() || batch.contains(&point) {
                continue;
            }
            batch.push(point);
        }
        batch.sort_by_cached_key(|p| sort_key(p));

        let mut result = HashMap::with_capacity(batch.len());
        for (idx, point) in batch.into_iter().enumerate() {
            let ordinal = match self.assigned.get(point) {
                Some(&existing) => existing,
                None => {
                    let ordinal = idx as u32 + 1;
                    tracing::debug!("Assigned ordinal {ordinal} to point {point:?}");
                    self.assigned.insert(point.to_owned(), ordinal);
                    self.highest = self.highest.max(ordinal);
                    ordinal
                }
            };
            result.insert(point.to_owned(), ordinal);
        }
        result
    }

    pub fn get(&self, point: &str) -> Option<u32> {
        self.assigned.get(point).copied()
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    pub fn highest(&self) -> u32 {
        self.highest
    }

    pub fn clear(&mut self) {
        self.assigned.clear();
        self.highest = 0;
    }
}

/// Case- and accent-insensitive ordering key, so "Ávila" sorts among the A's.
/// Ties fall back to the plain lowercase form.
fn sort_key(point: &str) -> (String, String) {
    let lower = point.to_lowercase();
    let folded = lower.chars().map(fold_accent).collect();
    (folded, lower)
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => c,
    }
}
