//! Global CSS styles for the showcase page.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PINK (Accents, Icons, Primary Actions) */
  --pink: #ec4899;
  --pink-deep: #db2777;
  --pink-soft: #fce7f3;
  --pink-glow: rgba(236, 72, 153, 0.25);

  /* WHITE (Surfaces) */
  --white: #ffffff;
  --white-warm: #fff7fb;

  /* GRAY (Text, Borders) */
  --gray: #6b7280;
  --gray-light: #e5e7eb;
  --gray-dark: #374151;

  /* TEXT */
  --text-primary: #1f2937;
  --text-secondary: #6b7280;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Type Scale */
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-3xl: 2.5rem;

  /* Shape */
  --radius-md: 0.75rem;
  --radius-lg: 1.25rem;
  --radius-full: 9999px;
  --shadow-card: 0 10px 30px -12px rgba(236, 72, 153, 0.35);

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: linear-gradient(160deg, var(--pink-soft) 0%, var(--white-warm) 45%, var(--white) 100%);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Page Layout === */
.showcase {
  max-width: 1040px;
  margin: 0 auto;
  padding: 3rem 1.5rem 4rem;
  display: flex;
  flex-direction: column;
  gap: 2.5rem;
}

/* === Header === */
.showcase-header {
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
  gap: 0.75rem;
}

.logo-mark {
  width: 72px;
  height: 72px;
  border-radius: var(--radius-full);
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--white);
  background: linear-gradient(135deg, var(--pink) 0%, var(--pink-deep) 100%);
  box-shadow: 0 0 0 8px var(--pink-glow);
}

.page-title {
  font-size: var(--text-3xl);
  font-weight: 700;
  letter-spacing: -0.02em;
  color: var(--pink-deep);
}

.page-subtitle {
  font-size: var(--text-lg);
  color: var(--text-secondary);
}

.section-header {
  font-size: var(--text-xl);
  font-weight: 600;
  color: var(--gray-dark);
}

.body-text {
  font-size: var(--text-base);
  color: var(--text-secondary);
}

/* === Feature Grid === */
.feature-grid {
  display: grid;
  grid-template-columns: repeat(4, minmax(0, 1fr));
  gap: 1.25rem;
}

.feature-card {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  padding: 1.75rem 1rem;
  background: var(--white);
  border: 1px solid var(--gray-light);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-card);
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.feature-card:hover {
  transform: translateY(-4px);
  box-shadow: 0 16px 36px -12px rgba(236, 72, 153, 0.45);
}

.feature-card__badge {
  width: 56px;
  height: 56px;
  border-radius: var(--radius-md);
  display: flex;
  align-items: center;
  justify-content: center;
}

.feature-card__title {
  font-size: var(--text-lg);
  font-weight: 600;
  color: var(--gray-dark);
}

/* === Palette Modifiers === */
.palette-pink {
  background: var(--pink-soft);
  color: var(--pink-deep);
}

.palette-white {
  background: var(--white);
  color: var(--gray-dark);
}

.palette-gray {
  background: var(--gray-light);
  color: var(--gray-dark);
}

/* === Theme Samples === */
.theme-samples {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 1.5rem;
}

.theme-panel {
  padding: 2rem;
  border-radius: var(--radius-lg);
  border: 1px solid var(--gray-light);
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.theme-panel.palette-pink {
  background: linear-gradient(135deg, var(--pink) 0%, var(--pink-deep) 100%);
  color: var(--white);
  border-color: transparent;
}

.theme-panel__title {
  font-size: var(--text-xl);
  font-weight: 700;
}

.theme-panel__text {
  font-size: var(--text-sm);
  opacity: 0.85;
}

.theme-panel__actions {
  display: flex;
  gap: 0.75rem;
  margin-top: 0.5rem;
}

/* === Buttons === */
.btn {
  font-family: var(--font-sans);
  font-size: var(--text-sm);
  font-weight: 600;
  padding: 0.625rem 1.25rem;
  border-radius: var(--radius-full);
  border: 2px solid transparent;
  cursor: pointer;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.btn:hover {
  transform: translateY(-1px);
}

.btn-solid.palette-pink {
  background: var(--pink);
  color: var(--white);
}

.btn-solid.palette-white {
  background: var(--white);
  color: var(--pink-deep);
}

.btn-outline {
  background: transparent;
}

.btn-outline.palette-pink {
  border-color: var(--pink);
  color: var(--pink-deep);
}

.btn-outline.palette-white {
  border-color: var(--white);
  color: var(--white);
}

/* === Summary Panel === */
.summary-panel {
  padding: 2rem;
  background: var(--white);
  border: 1px solid var(--gray-light);
  border-radius: var(--radius-lg);
  text-align: center;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.summary-panel__tags {
  display: flex;
  justify-content: center;
  flex-wrap: wrap;
  gap: 0.75rem;
  margin-top: 0.5rem;
}

.tag-pill {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.375rem 0.875rem;
  border-radius: var(--radius-full);
  border: 1px solid var(--gray-light);
  font-size: var(--text-sm);
  color: var(--gray-dark);
  background: var(--white);
}

.tag-pill__swatch {
  width: 10px;
  height: 10px;
  border-radius: var(--radius-full);
  border: 1px solid var(--gray-light);
}

.tag-pill__swatch.palette-pink { background: var(--pink); }
.tag-pill__swatch.palette-gray { background: var(--gray); }

/* === Responsive === */
@media (max-width: 860px) {
  .feature-grid {
    grid-template-columns: repeat(2, minmax(0, 1fr));
  }

  .theme-samples {
    grid-template-columns: 1fr;
  }
}

@media (max-width: 480px) {
  .feature-grid {
    grid-template-columns: 1fr;
  }

  .page-title {
    font-size: var(--text-xl);
  }
}
"#;
