//! The fixed content rendered by the showcase page.
//!
//! Nothing in here is created or mutated at runtime.

use serde::Serialize;

pub const SITE_NAME: &str = "SmartPath";
pub const TITLE: &str = "SmartPath: A Computational Pathology Platform Empowered by Large AI Models for Precision Oncology";
pub const RESOURCES_HEADING: &str = "Model Resources";
pub const CITATION_HEADING: &str = "Citation";
pub const LOGO_ALT: &str = "MEIntelligence Logo";
pub const SCROLL_PROMPT: &str = "Scroll to view demo";
pub const VIDEO_FALLBACK: &str = "Your browser does not support the video tag.";
pub const FOOTER: [&str; 2] = [
    "©Smartlab. All rights reserved.",
    "This demo page was created to showcase our research paper.",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Asset {
    pub path: &'static str,
    pub mime: &'static str,
}

pub const LOGO: Asset = Asset {
    path: "logo.svg",
    mime: "image/svg+xml",
};

pub const DEMO_VIDEO: Asset = Asset {
    path: "1639_1745828331.mp4",
    mime: "video/mp4",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum IconKind {
    Paper,
    Code,
    Model,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ResourceLink {
    pub label: &'static str,
    pub url: &'static str,
    pub icon: IconKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ResourceGroup {
    pub title: &'static str,
    pub links: &'static [ResourceLink],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Citation {
    /// The BibTeX entry key.
    pub key: &'static str,
    pub heading: &'static str,
    pub bibtex: &'static str,
}

pub const RESOURCE_GROUPS: [ResourceGroup; 2] = [
    ResourceGroup {
        title: "GPFM",
        links: &[
            ResourceLink {
                label: "Paper",
                url: "https://arxiv.org/abs/2407.18449",
                icon: IconKind::Paper,
            },
            ResourceLink {
                label: "GitHub",
                url: "https://github.com/birkhoffkiki/GPFM/",
                icon: IconKind::Code,
            },
            ResourceLink {
                label: "Model",
                url: "https://huggingface.co/GPFM",
                icon: IconKind::Model,
            },
        ],
    },
    ResourceGroup {
        title: "mSTAR",
        links: &[
            ResourceLink {
                label: "Paper",
                url: "https://arxiv.org/abs/2407.15362",
                icon: IconKind::Paper,
            },
            ResourceLink {
                label: "GitHub",
                url: "https://github.com/Innse/mSTAR",
                icon: IconKind::Code,
            },
            ResourceLink {
                label: "Model",
                url: "https://huggingface.co/mSTAR",
                icon: IconKind::Model,
            },
        ],
    },
];

pub const CITATIONS: [Citation; 2] = [
    Citation {
        key: "ma2024towards",
        heading: "Towards a generalizable pathology foundation model via unified knowledge distillation",
        bibtex: "@article{ma2024towards,
  title={Towards a generalizable pathology foundation model via unified knowledge distillation},
  author={Ma, Jiabo and Guo, Zhengrui and Zhou, Fengtao and Wang, Yihui and Xu, Yingxue and Cai, Yu and Zhu, Zhengjie and Jin, Cheng and Lin, Yi and Jiang, Xinrui and others},
  journal={arXiv preprint arXiv:2407.18449},
  year={2024}
}",
    },
    Citation {
        key: "xu2024multimodal",
        heading: "A multimodal knowledge-enhanced whole-slide pathology foundation model",
        bibtex: "@article{xu2024multimodal,
  title={A multimodal knowledge-enhanced whole-slide pathology foundation model},
  author={Xu, Yingxue and Wang, Yihui and Zhou, Fengtao and Ma, Jiabo and Jin, Cheng and Yang, Shu and Li, Jinbang and Zhang, Zhengyu and Zhao, Chenglong and Zhou, Huajun and others},
  journal={arXiv preprint arXiv:2407.15362},
  year={2024}
}",
    },
];

/// All external resource URLs in the order they appear on the page.
pub fn external_urls() -> impl Iterator<Item = &'static str> {
    RESOURCE_GROUPS.iter()
        .flat_map(|group| group.links.iter())
        .map(|link| link.url)
}
