//! Display titles for chain positions.

use aq_chain::Chain;
use aq_components::FlowComponent;

/// Unique `<Kind><n>` title per chain position, `n` counting from 1 per kind.
pub fn series_titles(chain: &Chain) -> Vec<String> {
    let mut titles: Vec<String> = Vec::with_capacity(chain.len());
    for (_, component) in chain.iter() {
        let kind = component.kind();
        let mut n = 1;
        let mut title = format!("{}{}", kind, n);
        while titles.contains(&title) {
            n += 1;
            title = format!("{}{}", kind, n);
        }
        titles.push(title);
    }
    titles
}

#[cfg(test)]
mod tests {
    use super::*;
    use aq_components::{Container, Pump};

    #[test]
    fn titles_count_per_kind() {
        let mut chain = Chain::new();
        let p = chain.push(Pump::new(1.0).unwrap()).unwrap();
        let c1 = chain.push(Container::new(p, 1.0, 1.0, 0.0).unwrap()).unwrap();
        chain.push(Container::new(c1, 1.0, 1.0, 0.0).unwrap()).unwrap();
        chain.push(Pump::new(2.0).unwrap()).unwrap();

        assert_eq!(
            series_titles(&chain),
            vec!["Pump1", "Container1", "Container2", "Pump2"]
        );
    }
}
