//! Page shell: header, FAQ and footer composed in that order.
//!
//! Static composition only. The regions share no state.

use crate::view::Node;
use serde::{Deserialize, Serialize};

/// A navigation or footer link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    fn to_node(&self) -> Node {
        Node::Link {
            label: self.label.clone(),
            href: self.href.clone(),
        }
    }
}

/// Top region: brand and navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub brand: String,
    #[serde(default)]
    pub links: Vec<NavLink>,
}

impl Header {
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            links: Vec::new(),
        }
    }

    pub fn with_link(mut self, link: NavLink) -> Self {
        self.links.push(link);
        self
    }

    pub fn render(&self) -> Node {
        let mut children = vec![Node::Heading {
            level: 1,
            text: self.brand.clone(),
        }];
        children.extend(self.links.iter().map(NavLink::to_node));
        Node::Container {
            class: Some("header".to_string()),
            children,
        }
    }
}

/// One question and its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Middle region: a titled list of questions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub title: String,
    #[serde(default)]
    pub entries: Vec<FaqEntry>,
}

impl Faq {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    pub fn with_entry(mut self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        self.entries.push(FaqEntry {
            question: question.into(),
            answer: answer.into(),
        });
        self
    }

    pub fn render(&self) -> Node {
        let mut children = vec![Node::Heading {
            level: 2,
            text: self.title.clone(),
        }];
        for entry in &self.entries {
            children.push(Node::Heading {
                level: 5,
                text: entry.question.clone(),
            });
            children.push(Node::text(entry.answer.clone()));
        }
        Node::Container {
            class: Some("faq".to_string()),
            children,
        }
    }
}

/// Bottom region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub text: String,
    #[serde(default)]
    pub links: Vec<NavLink>,
}

impl Footer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            links: Vec::new(),
        }
    }

    pub fn with_link(mut self, link: NavLink) -> Self {
        self.links.push(link);
        self
    }

    pub fn render(&self) -> Node {
        let mut children = vec![Node::styled_text(self.text.clone(), "text-muted small")];
        children.extend(self.links.iter().map(NavLink::to_node));
        Node::Container {
            class: Some("footer".to_string()),
            children,
        }
    }
}

/// The three regions of the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageShell {
    pub header: Header,
    pub faq: Faq,
    pub footer: Footer,
}

impl PageShell {
    pub fn new(header: Header, faq: Faq, footer: Footer) -> Self {
        Self {
            header,
            faq,
            footer,
        }
    }

    pub fn render(&self) -> Node {
        Node::Container {
            class: None,
            children: vec![self.header.render(), self.faq.render(), self.footer.render()],
        }
    }
}
