// src/site/svg.rs
//
// Procedurally generated SVG artwork served under /img/.

const PALETTE: [&str; 6] = [
    "#7dd3fc", "#c4b5fd", "#34d399", "#fb7185", "#fbbf24", "#60a5fa",
];

const ART_LABELS: [&str; 8] = [
    "Interior Finish — Clean Edges",
    "Exterior Refresh — Weather Ready",
    "Commercial — Durable Coats",
    "Surface Prep — Smooth Base",
    "Premium Finish — Even Coverage",
    "Detail Work — Trims & Doors",
    "Retail Space — After Hours",
    "Apartment Repaint — Low Odour",
];

pub const BRANDMARK: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 120 120" role="img" aria-label="Brandmark">
  <defs>
    <linearGradient id="g" x1="0" y1="0" x2="1" y2="1">
      <stop offset="0" stop-color="#7dd3fc"/>
      <stop offset=".55" stop-color="#c4b5fd"/>
      <stop offset="1" stop-color="#34d399"/>
    </linearGradient>
    <filter id="b" x="-40%" y="-40%" width="180%" height="180%">
      <feGaussianBlur stdDeviation="4"/>
    </filter>
  </defs>
  <rect x="10" y="10" width="100" height="100" rx="30" fill="rgba(255,255,255,.05)" stroke="rgba(255,255,255,.14)"/>
  <path d="M30 70c12 0 18-12 30-12s18 12 30 12" fill="none" stroke="url(#g)" stroke-width="10" stroke-linecap="round"/>
  <path d="M28 46c6 0 9-5 14-5s8 5 14 5 9-5 14-5 8 5 14 5" fill="none" stroke="rgba(255,255,255,.55)" stroke-width="7" stroke-linecap="round"/>
  <circle cx="36" cy="86" r="4" fill="#7dd3fc" filter="url(#b)" opacity=".9"/>
  <circle cx="60" cy="90" r="4" fill="#c4b5fd" filter="url(#b)" opacity=".9"/>
  <circle cx="84" cy="86" r="4" fill="#34d399" filter="url(#b)" opacity=".9"/>
</svg>"##;

/// Hero panel wash: soft top-left highlight over light blue with a vignette.
pub const HERO_BACKGROUND: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1600 900" preserveAspectRatio="none">
  <defs>
    <linearGradient id="wash" x1="0" y1="0" x2="0" y2="1">
      <stop offset="0" stop-color="#f6f9ff"/>
      <stop offset="1" stop-color="#eef4ff"/>
    </linearGradient>
    <radialGradient id="spot" cx="18%" cy="20%" r="70%">
      <stop offset="0" stop-color="#ffffff" stop-opacity="0.95"/>
      <stop offset="0.40" stop-color="#dfeaff" stop-opacity="0.55"/>
      <stop offset="1" stop-color="#dfeaff" stop-opacity="0"/>
    </radialGradient>
    <radialGradient id="vignette" cx="50%" cy="35%" r="85%">
      <stop offset="0" stop-color="#000000" stop-opacity="0"/>
      <stop offset="1" stop-color="#000000" stop-opacity="0.08"/>
    </radialGradient>
    <filter id="grain">
      <feTurbulence type="fractalNoise" baseFrequency=".9" numOctaves="3" stitchTiles="stitch"/>
      <feColorMatrix type="matrix" values="1 0 0 0 0  0 1 0 0 0  0 0 1 0 0  0 0 0 .08 0"/>
    </filter>
  </defs>
  <rect width="1600" height="900" fill="url(#wash)"/>
  <rect width="1600" height="900" fill="url(#spot)"/>
  <rect width="1600" height="900" fill="url(#vignette)"/>
  <rect width="1600" height="900" filter="url(#grain)" opacity=".45"/>
</svg>"##;

/// The three gradient colours used for a given seed. Any integer is a valid
/// seed; negative ones wrap like a floored modulo.
pub fn art_colours(seed: i64) -> [&'static str; 3] {
    let seed = i128::from(seed);
    [
        PALETTE[pick(seed * 3, PALETTE.len())],
        PALETTE[pick(seed * 5 + 1, PALETTE.len())],
        PALETTE[pick(seed * 7 + 2, PALETTE.len())],
    ]
}

pub fn art_label(seed: i64) -> &'static str {
    ART_LABELS[pick(i128::from(seed), ART_LABELS.len())]
}

fn pick(value: i128, len: usize) -> usize {
    value.rem_euclid(len as i128) as usize
}

/// Abstract "finish board" used as portfolio placeholder art.
pub fn portfolio_art(seed: i64) -> String {
    let [c1, c2, c3] = art_colours(seed);
    let label = art_label(seed);

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1400 900">
  <defs>
    <linearGradient id="bg" x1="0" y1="0" x2="1" y2="1">
      <stop offset="0" stop-color="{c1}" stop-opacity=".35"/>
      <stop offset=".55" stop-color="{c2}" stop-opacity=".20"/>
      <stop offset="1" stop-color="{c3}" stop-opacity=".18"/>
    </linearGradient>
    <linearGradient id="s" x1="0" y1="0" x2="1" y2="0">
      <stop offset="0" stop-color="{c1}"/>
      <stop offset="1" stop-color="{c2}"/>
    </linearGradient>
    <filter id="blur" x="-30%" y="-30%" width="160%" height="160%">
      <feGaussianBlur stdDeviation="22"/>
    </filter>
    <filter id="grain">
      <feTurbulence type="fractalNoise" baseFrequency=".8" numOctaves="3" stitchTiles="stitch" />
      <feColorMatrix type="matrix" values="1 0 0 0 0  0 1 0 0 0  0 0 1 0 0  0 0 0 .18 0"/>
    </filter>
  </defs>

  <rect width="1400" height="900" fill="rgba(255,255,255,.03)"/>
  <rect width="1400" height="900" fill="url(#bg)"/>

  <circle cx="260" cy="240" r="240" fill="{c1}" opacity=".16" filter="url(#blur)"/>
  <circle cx="1120" cy="280" r="300" fill="{c2}" opacity=".12" filter="url(#blur)"/>
  <circle cx="760" cy="760" r="360" fill="{c3}" opacity=".10" filter="url(#blur)"/>

  <path d="M160 580 C360 460 520 520 700 420 C900 320 1080 360 1240 260"
        fill="none" stroke="url(#s)" stroke-width="34" stroke-linecap="round" opacity=".55"/>
  <path d="M150 660 C400 590 560 640 770 570 C980 500 1100 540 1260 470"
        fill="none" stroke="rgba(255,255,255,.55)" stroke-width="18" stroke-linecap="round" opacity=".28"/>

  <g opacity=".88">
    <rect x="380" y="390" width="640" height="380" rx="26" fill="rgba(0,0,0,.18)" stroke="rgba(255,255,255,.14)"/>
    <path d="M420 710 H980" stroke="rgba(255,255,255,.35)" stroke-width="10" stroke-linecap="round"/>
    <path d="M420 650 H860" stroke="rgba(255,255,255,.28)" stroke-width="10" stroke-linecap="round"/>
    <path d="M420 590 H940" stroke="rgba(255,255,255,.22)" stroke-width="10" stroke-linecap="round"/>
  </g>

  <rect width="1400" height="900" filter="url(#grain)" opacity=".55"/>

  <text x="72" y="120" fill="rgba(255,255,255,.92)"
        font-family="ui-sans-serif, system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial"
        font-weight="900" font-size="54">{label}</text>
  <text x="72" y="168" fill="rgba(226,232,240,.78)"
        font-family="ui-sans-serif, system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial"
        font-weight="700" font-size="22">Generated portfolio artwork</text>
</svg>"##,
        label = xml_text(label),
    )
}

fn xml_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
