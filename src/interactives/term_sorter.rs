use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Safe,
    Unsafe,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SortItem {
    pub id: String,
    pub content: String,
    pub category: Bucket,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropFeedback {
    Correct,
    Wrong,
}

#[derive(Clone, Debug)]
pub struct TermSorter {
    pending: Vec<SortItem>,
    sorted: BTreeMap<&'static str, Vec<SortItem>>,
    safe_label: String,
    unsafe_label: String,
    last_feedback: Option<DropFeedback>,
}

fn default_items() -> Vec<SortItem> {
    [
        ("1", "123456", Bucket::Unsafe),
        ("2", "P@sw0rd!", Bucket::Unsafe),
        ("3", "Tr0ub4dor&3", Bucket::Safe),
        ("4", "MiNombreEsLuis", Bucket::Unsafe),
        ("5", "X7#m_9$pL2", Bucket::Safe),
    ]
    .into_iter()
    .map(|(id, content, category)| SortItem {
        id: id.to_string(),
        content: content.to_string(),
        category,
    })
    .collect()
}

fn bucket_key(bucket: Bucket) -> &'static str {
    match bucket {
        Bucket::Safe => "safe",
        Bucket::Unsafe => "unsafe",
    }
}

impl TermSorter {
    pub fn new(items: Option<Vec<SortItem>>, labels: Option<&BTreeMap<String, String>>) -> Self {
        let label = |key: &str, fallback: &str| {
            labels
                .and_then(|l| l.get(key))
                .cloned()
                .unwrap_or_else(|| fallback.to_string())
        };
        Self {
            pending: items.filter(|v| !v.is_empty()).unwrap_or_else(default_items),
            sorted: BTreeMap::new(),
            safe_label: label("safe", "Contraseña fuerte"),
            unsafe_label: label("unsafe", "Contraseña débil"),
            last_feedback: None,
        }
    }

    pub fn pending(&self) -> &[SortItem] {
        &self.pending
    }

    pub fn sorted(&self, bucket: Bucket) -> &[SortItem] {
        self.sorted
            .get(bucket_key(bucket))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn label(&self, bucket: Bucket) -> &str {
        match bucket {
            Bucket::Safe => &self.safe_label,
            Bucket::Unsafe => &self.unsafe_label,
        }
    }

    pub fn last_feedback(&self) -> Option<DropFeedback> {
        self.last_feedback
    }

    /// Suelta un elemento en un cubo. Si no es su categoría vuelve a la pila.
    pub fn drop_item(&mut self, item_id: &str, bucket: Bucket) -> Option<DropFeedback> {
        let pos = self.pending.iter().position(|i| i.id == item_id)?;
        let feedback = if self.pending[pos].category == bucket {
            let item = self.pending.remove(pos);
            self.sorted.entry(bucket_key(bucket)).or_default().push(item);
            DropFeedback::Correct
        } else {
            DropFeedback::Wrong
        };
        self.last_feedback = Some(feedback);
        Some(feedback)
    }

    pub fn is_solved(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_bucket_keeps_item_pending() {
        let mut sorter = TermSorter::new(None, None);
        assert_eq!(sorter.drop_item("1", Bucket::Safe), Some(DropFeedback::Wrong));
        assert_eq!(sorter.pending().len(), 5);
        assert_eq!(sorter.drop_item("1", Bucket::Unsafe), Some(DropFeedback::Correct));
        assert_eq!(sorter.pending().len(), 4);
        assert_eq!(sorter.sorted(Bucket::Unsafe).len(), 1);
        assert_eq!(sorter.drop_item("1", Bucket::Unsafe), None);
    }

    #[test]
    fn solved_when_stack_is_empty() {
        let items: Vec<SortItem> = serde_yaml::from_str(
            "- { id: '1', content: admin, category: unsafe }\n- { id: '2', content: 'L8*q_Z1!', category: safe }\n",
        )
        .unwrap();
        let mut sorter = TermSorter::new(Some(items), None);
        sorter.drop_item("1", Bucket::Unsafe);
        assert!(!sorter.is_solved());
        sorter.drop_item("2", Bucket::Safe);
        assert!(sorter.is_solved());
    }

    #[test]
    fn custom_labels_override_defaults() {
        let mut labels = BTreeMap::new();
        labels.insert("safe".to_string(), "Frase".to_string());
        let sorter = TermSorter::new(None, Some(&labels));
        assert_eq!(sorter.label(Bucket::Safe), "Frase");
        assert_eq!(sorter.label(Bucket::Unsafe), "Contraseña débil");
    }
}
