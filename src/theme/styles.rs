//! Global CSS styles for the Image Resizer.
//!
//! Dark card on a void background, moss-green accents.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* VOID (Backgrounds) */
  --void-black: #0a0a0a;
  --void-card: #16181a;
  --void-input: #24272a;
  --void-border: #2a2a2a;

  /* MOSS GREEN (Accents, Actions) */
  --moss: #5a7a5a;
  --moss-glow: #7cb87c;
  --moss-bright: #4ade80;

  /* TEXT */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* SEMANTIC */
  --danger: #ff3366;

  /* Typography */
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-xl: 1.25rem;
  --text-3xl: 2.25rem;

  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-mono);
  background: var(--void-black);
  color: var(--text-primary);
  min-height: 100vh;
}

/* === Layout === */
.resizer {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
}

.resizer-card {
  background: var(--void-card);
  padding: 2rem;
  border-radius: 8px;
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.5);
}

.page-title {
  font-size: var(--text-3xl);
  font-weight: 700;
  color: var(--moss-bright);
  text-align: center;
  margin-bottom: 1rem;
}

/* === Drop Zone === */
.drop-zone {
  display: flex;
  align-items: center;
  justify-content: center;
  margin: 0 auto;
  padding: 2.5rem;
  border: 2px dashed var(--moss-bright);
  border-radius: 4px;
  text-align: center;
  cursor: pointer;
  overflow: hidden;
  transition: border-color var(--transition-fast), background var(--transition-fast);
}

.drop-zone--loaded {
  padding: 0;
}

.drop-zone--hover {
  border-color: var(--moss-glow);
  background: rgba(74, 222, 128, 0.08);
}

.drop-zone__hint {
  font-size: var(--text-xl);
  font-weight: 700;
}

.drop-zone__preview {
  width: 100%;
  height: 100%;
  object-fit: cover;
  pointer-events: none;
}

/* === Controls === */
.resizer-controls {
  margin-top: 1rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.size-select {
  background: var(--void-input);
  color: var(--text-primary);
  border: 1px solid var(--void-border);
  border-radius: 4px;
  padding: 0.5rem;
  font-family: var(--font-mono);
}

.btn-download {
  padding: 0.5rem 1rem;
  background: #22c55e;
  border: none;
  border-radius: 4px;
  color: var(--text-primary);
  font-family: var(--font-mono);
  font-weight: 700;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-download:hover {
  background: #16a34a;
}

.btn-download:disabled {
  opacity: 0.6;
  cursor: wait;
}

/* === Status === */
.status {
  margin-top: 1rem;
  font-size: var(--text-sm);
  max-width: 24rem;
  word-break: break-all;
}

.status--saved {
  color: var(--text-secondary);
}

.status--error {
  color: var(--danger);
}
"#;
