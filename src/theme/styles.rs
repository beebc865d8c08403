//! Global CSS for the panelkit gallery.
//!
//! One rule set per class token the wrappers emit. Heights, max widths, grid
//! columns and gaps come from props as inline styles and have no rules here.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --surface: #0f1115;
  --surface-raised: #171a21;
  --surface-border: #262b36;

  /* Text */
  --text-primary: #eef1f6;
  --text-secondary: rgba(238, 241, 246, 0.7);
  --text-muted: rgba(238, 241, 246, 0.5);

  /* Accents */
  --accent: #4f8cff;
  --positive: #3fbf7f;
  --warning: #ffb020;
  --danger: #ff4d6a;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  /* Transitions */
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--surface);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Gallery Shell === */
.gallery-header {
  display: flex;
  align-items: baseline;
  gap: 2rem;
  padding: 1rem 2rem;
  border-bottom: 1px solid var(--surface-border);
}

.gallery-title {
  font-size: var(--text-xl);
  font-weight: 600;
}

.gallery-nav {
  display: flex;
  gap: 1rem;
}

.gallery-nav a {
  color: var(--text-secondary);
  text-decoration: none;
  font-family: var(--font-mono);
  font-size: var(--text-sm);
}

.gallery-nav a:hover {
  color: var(--accent);
}

.gallery-page {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  padding: 2rem;
}

.gallery-section {
  font-size: var(--text-lg);
  color: var(--text-secondary);
}

.gallery-row {
  display: flex;
  flex-wrap: wrap;
  align-items: flex-start;
  gap: 1.5rem;
}

.gallery-input {
  width: 100%;
  padding: 0.5rem 0.75rem;
  background: transparent;
  color: var(--text-primary);
  border: 1px solid var(--surface-border);
  border-radius: 6px;
  font: inherit;
}

.gallery-overlay-host {
  position: relative;
  min-height: 120px;
  border: 1px dashed var(--surface-border);
  border-radius: 8px;
}

/* === Form Wrapper === */
.form-wrapper {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  width: 100%;
}

.form-wrapper--card {
  padding: 1.5rem;
  background: var(--surface-raised);
  border: 1px solid var(--surface-border);
  border-radius: 10px;
}

.form-wrapper--inline {
  flex-direction: row;
  align-items: flex-end;
}

.form-wrapper--full-width {
  max-width: none;
}

.form-wrapper--compact {
  gap: 0.5rem;
}

.form-wrapper--compact.form-wrapper--card {
  padding: 0.75rem;
}

/* === Form Section === */
.form-section {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  border: none;
}

.form-section--bordered {
  padding: 1rem;
  border: 1px solid var(--surface-border);
  border-radius: 8px;
}

.form-section__title {
  font-size: var(--text-lg);
  font-weight: 600;
}

.form-section__description {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

/* === Form Label === */
.form-label {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.form-label__required {
  color: var(--danger);
}

.form-label__hint {
  color: var(--text-muted);
  font-style: italic;
}

/* === Loader === */
.loader {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
  color: var(--text-secondary);
}

.loader__spinner {
  width: 24px;
  height: 24px;
  border: 2px solid var(--surface-border);
  border-top-color: var(--accent);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

.loader--sm .loader__spinner { width: 14px; height: 14px; }
.loader--lg .loader__spinner { width: 40px; height: 40px; border-width: 3px; }

.loader--inline {
  display: inline-flex;
}

.loader--overlay {
  position: absolute;
  inset: 0;
  background: rgba(15, 17, 21, 0.7);
}

.loader__label {
  font-size: var(--text-sm);
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Stat Grid === */
.stat-grid {
  display: grid;
}

.stat-card {
  padding: 1rem 1.25rem;
  background: var(--surface-raised);
  border: 1px solid var(--surface-border);
  border-left: 3px solid var(--surface-border);
  border-radius: 8px;
}

.stat-card--positive { border-left-color: var(--positive); }
.stat-card--warning { border-left-color: var(--warning); }
.stat-card--negative { border-left-color: var(--danger); }

.stat-card--highlighted {
  box-shadow: 0 0 0 1px var(--accent);
}

.stat-card__value {
  font-size: var(--text-2xl);
  font-weight: 600;
  font-family: var(--font-mono);
}

.stat-card__label {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.stat-card__hint {
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.stat-grid--compact .stat-card {
  padding: 0.5rem 0.75rem;
}

.stat-grid--compact .stat-card__value {
  font-size: var(--text-xl);
}

/* === Summary Panel === */
.summary-panel {
  min-width: 260px;
  padding: 1.25rem;
  background: var(--surface-raised);
  border: 1px solid var(--surface-border);
  border-top: 3px solid var(--surface-border);
  border-radius: 8px;
}

.summary-panel--info { border-top-color: var(--accent); }
.summary-panel--success { border-top-color: var(--positive); }
.summary-panel--warning { border-top-color: var(--warning); }
.summary-panel--danger { border-top-color: var(--danger); }

.summary-panel--compact {
  padding: 0.75rem;
}

.summary-panel--full-width {
  width: 100%;
}

.summary-panel__title {
  margin-bottom: 0.75rem;
  font-size: var(--text-base);
  font-weight: 600;
}

.summary-panel__body {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.summary-item {
  display: flex;
  justify-content: space-between;
  gap: 1rem;
  font-size: var(--text-sm);
}

.summary-item__label {
  color: var(--text-secondary);
}

.summary-item__value {
  font-family: var(--font-mono);
}

.summary-item--emphasized {
  padding-top: 0.5rem;
  border-top: 1px solid var(--surface-border);
  font-weight: 600;
}

/* === View Details === */
.view-container {
  width: 100%;
  padding: 1.5rem;
  background: var(--surface-raised);
  border: 1px solid var(--surface-border);
  border-radius: 10px;
}

.view-container--full-width {
  max-width: none;
}

.view-container__title {
  margin-bottom: 1rem;
  font-size: var(--text-xl);
  font-weight: 600;
}

.view-grid {
  display: grid;
}

.view-field {
  display: flex;
  flex-direction: column;
}

.view-field--inline {
  flex-direction: row;
  align-items: baseline;
  gap: 0.5rem;
}

.view-field__label {
  font-size: var(--text-xs);
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--text-muted);
}

.view-field__value {
  font-size: var(--text-base);
}

.view-field--empty .view-field__value {
  color: var(--text-muted);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_block_has_a_rule() {
        for block in [
            ".form-wrapper",
            ".form-section",
            ".form-label",
            ".loader",
            ".stat-grid",
            ".stat-card",
            ".summary-panel",
            ".summary-item",
            ".view-container",
            ".view-grid",
            ".view-field",
        ] {
            assert!(
                GLOBAL_STYLES.contains(&format!("{block} {{")),
                "missing rule for {block}"
            );
        }
    }
}
