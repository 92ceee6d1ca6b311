use super::types::ContainerFrame;

/// The container stack currently open in the default grammar.
#[derive(Debug, Default, Clone)]
pub struct ContainerPath(pub Vec<ContainerFrame>);

impl ContainerPath {
    pub fn set_blockquote_depth(&mut self, depth: u8) {
        self.0
            .retain(|f| !matches!(f, ContainerFrame::BlockQuote { .. }));
        if depth > 0 {
            self.0.push(ContainerFrame::BlockQuote { depth });
        }
    }

    pub fn blockquote_depth(&self) -> u8 {
        self.0
            .iter()
            .find_map(|f| match f {
                ContainerFrame::BlockQuote { depth } => Some(*depth),
            })
            .unwrap_or(0)
    }

    pub fn frames(&self) -> Vec<ContainerFrame> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_zero_clears_quotes() {
        let mut path = ContainerPath::default();
        path.set_blockquote_depth(2);
        path.set_blockquote_depth(0);
        assert!(path.frames().is_empty());
    }

    #[test]
    fn depth_replaces_previous_quote_frame() {
        let mut path = ContainerPath::default();
        path.set_blockquote_depth(1);
        path.set_blockquote_depth(3);
        assert_eq!(path.frames(), vec![ContainerFrame::BlockQuote { depth: 3 }]);
    }
}
