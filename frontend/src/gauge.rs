//! Circular percentage gauge.
//!
//! Arc length shows magnitude only; the sign picks the palette.

use std::f64::consts::PI;

use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeArc {
    /// 0.0 to 1.0, saturating at |100|%
    pub sweep_fraction: f64,
    pub is_positive: bool,
}

pub fn compute_arc(percentage: f64) -> GaugeArc {
    GaugeArc {
        sweep_fraction: percentage.abs().min(100.0) / 100.0,
        is_positive: percentage >= 0.0,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingGeometry {
    pub radius: f64,
    pub circumference: f64,
}

impl RingGeometry {
    pub fn new(size: u32, stroke_width: u32) -> Self {
        let radius = (f64::from(size) - f64::from(stroke_width)) / 2.0;
        Self {
            radius,
            circumference: radius * 2.0 * PI,
        }
    }

    /// `stroke-dashoffset` that leaves `arc` of the ring drawn.
    pub fn dash_offset(&self, arc: GaugeArc) -> f64 {
        self.circumference - arc.sweep_fraction * self.circumference
    }
}

/// Gradient stops for the arc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub id: &'static str,
    pub from: &'static str,
    pub to: &'static str,
    pub text_class: &'static str,
    pub glow_class: &'static str,
}

const POSITIVE: Palette = Palette {
    id: "progressGradient-positive",
    from: "rgb(74 222 128)",
    to: "rgb(34 197 94)",
    text_class: "text-green-400",
    glow_class: "bg-gradient-to-br from-green-400/20 to-green-600/10",
};

const NEGATIVE: Palette = Palette {
    id: "progressGradient-negative",
    from: "rgb(248 113 113)",
    to: "rgb(239 68 68)",
    text_class: "text-red-400",
    glow_class: "bg-gradient-to-br from-red-400/20 to-red-600/10",
};

impl GaugeArc {
    pub fn palette(&self) -> Palette {
        if self.is_positive {
            POSITIVE
        } else {
            NEGATIVE
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CircularProgressProps {
    pub percentage: f64,
    #[prop_or(48)]
    pub size: u32,
    #[prop_or(12)]
    pub stroke_width: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(CircularProgress)]
pub fn circular_progress(props: &CircularProgressProps) -> Html {
    let arc = compute_arc(props.percentage);
    let ring = RingGeometry::new(props.size, props.stroke_width);
    let palette = arc.palette();
    let offset = ring.dash_offset(arc);
    let center = f64::from(props.size) / 2.0;
    let size = props.size.to_string();
    let outer = props.size + 24;

    html! {
        <div
            class={classes!("relative", "rounded-full", "bg-[#1a1b1e]", "shadow-[6px_6px_12px_#0d0e0f,_-6px_-6px_12px_#27282d]", "p-3", "transition-all", "duration-300", "hover:scale-105", "group", props.class.clone())}
            style={format!("width: {}px; height: {}px", outer, outer)}
        >
            <div class={classes!("absolute", "inset-0", "rounded-full", "opacity-0", "group-hover:opacity-100", "transition-opacity", "duration-300", palette.glow_class)}></div>
            <div class="absolute inset-3 rounded-full bg-[#1a1b1e] shadow-[inset_3px_3px_6px_#151617,_inset_-3px_-3px_6px_#1f2025]"></div>

            <svg class="absolute inset-3 transform -rotate-90" width={size.clone()} height={size.clone()}>
                <circle
                    cx={center.to_string()}
                    cy={center.to_string()}
                    r={ring.radius.to_string()}
                    fill="none"
                    stroke="currentColor"
                    stroke-width={props.stroke_width.to_string()}
                    class="text-gray-800/30"
                />
            </svg>

            <svg class="absolute inset-3 transform -rotate-90" width={size.clone()} height={size}>
                <defs>
                    <linearGradient id={palette.id} x1="0%" y1="0%" x2="100%" y2="100%">
                        <stop offset="0%" stop-color={palette.from} />
                        <stop offset="100%" stop-color={palette.to} />
                    </linearGradient>
                </defs>
                <circle
                    cx={center.to_string()}
                    cy={center.to_string()}
                    r={ring.radius.to_string()}
                    fill="none"
                    stroke={format!("url(#{})", palette.id)}
                    stroke-width={props.stroke_width.to_string()}
                    stroke-dasharray={ring.circumference.to_string()}
                    stroke-dashoffset={offset.to_string()}
                    stroke-linecap="round"
                    class="transition-all duration-300 drop-shadow-lg"
                >
                    <animate
                        attributeName="stroke-dashoffset"
                        from={ring.circumference.to_string()}
                        to={offset.to_string()}
                        dur="1.5s"
                        fill="freeze"
                        calcMode="spline"
                        keySplines="0.4 0 0.2 1"
                    />
                </circle>
            </svg>

            <div class="absolute inset-0 flex items-center justify-center">
                <div class="relative h-[55%] w-[55%] rounded-full bg-[#1a1b1e] shadow-[2px_2px_4px_#151617,_-2px_-2px_4px_#1f2025] flex items-center justify-center">
                    <div class={classes!("font-medium", "text-[11px]", "tracking-tight", palette.text_class)}>
                        { format!("{:.0}", props.percentage.abs()) }
                    </div>
                </div>
            </div>
        </div>
    }
}
