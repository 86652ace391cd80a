use dioxus::prelude::*;

/// Inline stroke icons (lucide geometry).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    Activity,
    Banknote,
    Bell,
    CheckCircle,
    ChevronDown,
    Clock,
    Download,
    LineChart,
    Loader,
    Menu,
    Plus,
    Search,
    Server,
    Settings,
    Wallet,
    Zap,
}

#[component]
pub fn Icon(name: IconName, #[props(default = "icon".to_string())] class: String) -> Element {
    let shape = match name {
        IconName::Activity => rsx! {
            path { d: "M22 12h-4l-3 9L9 3l-3 9H2" }
        },
        IconName::Banknote => rsx! {
            rect { x: "2", y: "6", width: "20", height: "12", rx: "2" }
            circle { cx: "12", cy: "12", r: "2" }
            path { d: "M6 12h.01M18 12h.01" }
        },
        IconName::Bell => rsx! {
            path { d: "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9" }
            path { d: "M10.3 21a1.94 1.94 0 0 0 3.4 0" }
        },
        IconName::CheckCircle => rsx! {
            path { d: "M22 11.08V12a10 10 0 1 1-5.93-9.14" }
            polyline { points: "22 4 12 14.01 9 11.01" }
        },
        IconName::ChevronDown => rsx! {
            path { d: "m6 9 6 6 6-6" }
        },
        IconName::Clock => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            polyline { points: "12 6 12 12 16 14" }
        },
        IconName::Download => rsx! {
            path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
            polyline { points: "7 10 12 15 17 10" }
            path { d: "M12 15V3" }
        },
        IconName::LineChart => rsx! {
            path { d: "M3 3v18h18" }
            path { d: "m19 9-5 5-4-4-3 3" }
        },
        IconName::Loader => rsx! {
            path { d: "M21 12a9 9 0 1 1-6.219-8.56" }
        },
        IconName::Menu => rsx! {
            path { d: "M4 6h16M4 12h16M4 18h16" }
        },
        IconName::Plus => rsx! {
            path { d: "M5 12h14M12 5v14" }
        },
        IconName::Search => rsx! {
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        },
        IconName::Server => rsx! {
            rect { x: "2", y: "2", width: "20", height: "8", rx: "2" }
            rect { x: "2", y: "14", width: "20", height: "8", rx: "2" }
            path { d: "M6 6h.01M6 18h.01" }
        },
        IconName::Settings => rsx! {
            circle { cx: "12", cy: "12", r: "3" }
            path { d: "M12 2v3M12 19v3M4.9 4.9l2.1 2.1M17 17l2.1 2.1M2 12h3M19 12h3M4.9 19.1 7 17M17 7l2.1-2.1" }
        },
        IconName::Wallet => rsx! {
            path { d: "M19 7V4a1 1 0 0 0-1-1H5a2 2 0 0 0 0 4h15a1 1 0 0 1 1 1v4h-3a2 2 0 0 0 0 4h3a1 1 0 0 0 1-1v-2a1 1 0 0 0-1-1" }
            path { d: "M3 5v14a2 2 0 0 0 2 2h15a1 1 0 0 0 1-1v-4" }
        },
        IconName::Zap => rsx! {
            polygon { points: "13 2 3 14 12 14 11 22 21 10 12 10 13 2" }
        },
    };

    rsx! {
        svg {
            class,
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {shape}
        }
    }
}
