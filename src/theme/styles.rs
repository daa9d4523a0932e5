//! Global CSS styles for the greeting page.
//!
//! Soft pastel gradients, script headings and the particle keyframes.

pub const GLOBAL_STYLES: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Great+Vibes&family=Playfair+Display:ital,wght@0,400;0,700;1,400&family=Poppins:wght@300;400;500;600&display=swap');

/* === CSS Custom Properties === */
:root {
  /* PINKS */
  --pink-300: #f9a8d4;
  --pink-500: #ec4899;
  --pink-600: #db2777;

  /* PURPLES */
  --purple-600: #9333ea;
  --purple-700: #7e22ce;
  --purple-800: #6b21a8;
  --purple-900: #581c87;

  /* ACCENTS */
  --rose-700: #be123c;
  --red-600: #dc2626;
  --butter: #fef08a;

  /* TEXT */
  --text-body: #374151;
  --text-strong: #1f2937;

  /* Typography */
  --font-script: 'Great Vibes', cursive;
  --font-serif: 'Playfair Display', serif;
  --font-sans: 'Poppins', sans-serif;

  /* Transitions */
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  margin: 0;
  padding: 0;
  overflow-x: hidden;
  font-family: var(--font-sans);
  color: var(--text-body);
}

/* === Scroll Container === */
.greeting-page {
  position: relative;
  height: 100vh;
  overflow-y: scroll;
  scroll-snap-type: y mandatory;
}

.snap-section {
  position: relative;
  z-index: 10;
  height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  scroll-snap-align: start;
  scroll-snap-stop: always;
}

.section-content {
  text-align: center;
  padding: 0 1rem;
  max-width: 56rem;
  margin: 0 auto;
}

.bg-greeting { background: linear-gradient(to bottom right, #fce7f3, #f3e8ff, #fee2e2); }
.bg-love { background: linear-gradient(to top right, #f3e8ff, #fce7f3, #fefce8); }
.bg-memories { background: linear-gradient(to bottom left, #fff1f2, #fffbeb, #faf5ff); }
.bg-wish { background: linear-gradient(to right, #e9d5ff, #fbcfe8, #fecaca); }

/* === Typography === */
.headline {
  font-family: var(--font-script);
  font-size: clamp(3rem, 7vw, 4.5rem);
  font-weight: 700;
  margin-bottom: 1.5rem;
  background: linear-gradient(to right, var(--pink-600), var(--purple-600));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.subheading {
  font-family: var(--font-serif);
  font-size: clamp(2.25rem, 5vw, 3rem);
  font-weight: 600;
  margin-bottom: 1.5rem;
  color: var(--purple-800);
}

.script-heading {
  font-family: var(--font-script);
  font-size: clamp(2.25rem, 5vw, 3.75rem);
  font-weight: 700;
  margin-bottom: 2rem;
}

.script-heading.rose { color: var(--rose-700); }
.script-heading.plum { color: var(--purple-900); }

.closing-wish {
  font-family: var(--font-script);
  font-size: clamp(1.875rem, 4vw, 2.25rem);
  font-weight: 600;
  margin-bottom: 1rem;
  background: linear-gradient(to right, var(--pink-600), var(--red-600));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.lead {
  font-family: var(--font-serif);
  font-size: clamp(1.25rem, 2.5vw, 1.5rem);
  line-height: 1.7;
  max-width: 42rem;
  margin: 0 auto;
}

.lead.wide { max-width: 48rem; font-size: clamp(1.5rem, 3vw, 1.875rem); margin-bottom: 2rem; color: var(--text-strong); }
.lead.sans { font-family: var(--font-sans); color: var(--text-strong); margin-bottom: 1.5rem; }
.lead.italic { font-style: italic; color: var(--text-strong); }

.emoji-row { font-size: 2.25rem; margin-bottom: 2rem; }
.emoji-row.small { font-size: 1.875rem; margin-top: 2rem; }
.emoji-row.large { font-size: 3rem; }
.emoji-badge { font-size: 3.75rem; display: block; margin-bottom: 1rem; }

/* === Cards === */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
  gap: 1.5rem;
  margin-bottom: 2rem;
}

.memory-card {
  background: rgba(255, 255, 255, 0.7);
  backdrop-filter: blur(4px);
  border: 1px solid rgba(255, 255, 255, 0.5);
  border-radius: 1rem;
  padding: 1.5rem;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.memory-card .icon { font-size: 2.25rem; margin-bottom: 1rem; }

/* === Buttons === */
.btn-music {
  position: fixed;
  top: 1.5rem;
  right: 1.5rem;
  z-index: 50;
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  border: none;
  border-radius: 9999px;
  background: var(--pink-500);
  color: white;
  font-family: var(--font-sans);
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
  cursor: pointer;
  transition: all var(--transition-normal);
  animation: pop-in 0.5s ease 0.5s both;
}

.btn-music:hover { background: var(--pink-600); }
.btn-music:disabled { opacity: 0.7; cursor: wait; }

.btn-share {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin: 0 auto;
  padding: 1rem 2rem;
  border: none;
  border-radius: 9999px;
  background: linear-gradient(to right, var(--pink-500), var(--purple-600));
  color: white;
  font-family: var(--font-sans);
  font-size: 1.125rem;
  font-weight: 600;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
  cursor: pointer;
  transition: all var(--transition-normal);
}

.btn-share:hover {
  background: linear-gradient(to right, var(--pink-600), var(--purple-700));
  transform: scale(1.05);
}

/* === Particles === */
.particle-layer {
  position: fixed;
  inset: 0;
  z-index: 0;
  pointer-events: none;
  overflow: hidden;
}

.floating-heart {
  position: absolute;
  bottom: 0;
  font-size: 1.25rem;
  color: var(--pink-300);
  opacity: 0;
  animation-name: float-heart;
  animation-timing-function: linear;
  animation-iteration-count: infinite;
}

.sparkle {
  position: absolute;
  border-radius: 9999px;
  background: var(--butter);
  opacity: 0;
  animation-name: sparkle-pulse;
  animation-timing-function: ease-in-out;
  animation-iteration-count: infinite;
}

@keyframes float-heart {
  0% { transform: translateY(100vh); opacity: 0; }
  50% { opacity: 0.7; }
  100% { transform: translateY(-100vh); opacity: 0; }
}

@keyframes sparkle-pulse {
  0%, 100% { opacity: 0; transform: scale(0); }
  50% { opacity: 1; transform: scale(1.2); }
}

/* === Reveals === */
.reveal {
  animation-fill-mode: both;
  animation-timing-function: ease-out;
}

.reveal-fade { animation-name: reveal-fade; }
.reveal-rise { animation-name: reveal-rise; }
.reveal-drop { animation-name: reveal-drop; }
.reveal-left { animation-name: reveal-left; }
.reveal-right { animation-name: reveal-right; }
.reveal-grow { animation-name: pop-in; }
.reveal-swell { animation-name: reveal-swell; }

@keyframes reveal-fade { from { opacity: 0; } to { opacity: 1; } }
@keyframes reveal-rise { from { opacity: 0; transform: translateY(50px); } to { opacity: 1; transform: none; } }
@keyframes reveal-drop { from { opacity: 0; transform: translateY(-50px); } to { opacity: 1; transform: none; } }
@keyframes reveal-left { from { opacity: 0; transform: translateX(-100px); } to { opacity: 1; transform: none; } }
@keyframes reveal-right { from { opacity: 0; transform: translateX(100px); } to { opacity: 1; transform: none; } }
@keyframes reveal-swell { from { opacity: 0; transform: scale(0.8); } to { opacity: 1; transform: none; } }
@keyframes pop-in { from { opacity: 0; transform: scale(0); } to { opacity: 1; transform: scale(1); } }
"#;
