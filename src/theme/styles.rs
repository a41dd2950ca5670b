//! Global CSS styles for imgdrop.
//!
//! Dark terminal palette; components reference classes only.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* VOID (Backgrounds) */
  --void-black: #0a0a0a;
  --void-lighter: #111516;
  --void-border: #1f2526;

  /* CYAN (Interactive) */
  --cyan: #00d4aa;
  --cyan-glow: rgba(0, 212, 170, 0.3);
  --cyan-wash: rgba(0, 212, 170, 0.06);

  /* MOSS (Success) */
  --moss: #5a7a5a;
  --moss-glow: #7cb87c;

  /* TEXT */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* SEMANTIC */
  --danger: #ff3366;
  --danger-wash: rgba(255, 51, 102, 0.12);

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-2xl: 2rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 200ms ease;
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
}

body {
  font-family: var(--font-mono);
  background: var(--void-black);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Upload Page === */
.upload-page {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 1.5rem;
}

.upload-page__header {
  text-align: center;
  margin-bottom: 2rem;
}

.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.tagline {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

/* === Image Uploader === */
.image-uploader {
  width: 100%;
  max-width: 28rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.drop-zone {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  width: 100%;
  height: 12rem;
  border: 2px dashed var(--void-border);
  border-radius: 8px;
  cursor: pointer;
  transition: all var(--transition-normal);
  color: var(--text-muted);
}

.drop-zone:hover {
  border-color: rgba(0, 212, 170, 0.5);
  background: var(--void-lighter);
}

.drop-zone--dragging {
  border-color: var(--cyan);
  background: var(--cyan-wash);
}

/* No clicks or drops reach the zone mid-upload */
.drop-zone--busy {
  pointer-events: none;
  opacity: 0.6;
}

.drop-zone__prompt {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
  text-align: center;
}

.drop-zone__icon {
  font-size: 2.5rem;
  line-height: 1;
}

.drop-zone__title {
  font-size: var(--text-sm);
  font-weight: 500;
}

.drop-zone__hint {
  font-size: var(--text-xs);
}

/* === Spinner === */
.spinner {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
}

.spinner__label {
  font-size: var(--text-sm);
}

.loading-spinner {
  width: 40px;
  height: 40px;
  border: 3px solid rgba(0, 212, 170, 0.2);
  border-top-color: var(--cyan);
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Phase Badge === */
.phase-badge {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.phase-badge__dot {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: var(--moss);
}

.phase-badge__dot--active {
  background: var(--cyan);
  box-shadow: 0 0 8px var(--cyan-glow);
  animation: pulse 1.2s ease-in-out infinite;
}

@keyframes pulse {
  50% { opacity: 0.4; }
}

/* === Result Panel === */
.result-panel {
  padding: 1rem;
  background: var(--void-lighter);
  border-radius: 8px;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.result-panel__label {
  font-size: var(--text-xs);
  font-weight: 500;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--text-muted);
}

.result-panel__row {
  display: flex;
  gap: 0.5rem;
}

.result-panel__url {
  flex: 1;
  min-width: 0;
  padding: 0.5rem 0.75rem;
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  color: var(--text-primary);
  background: var(--void-black);
  border: 1px solid var(--void-border);
  border-radius: 6px;
  text-overflow: ellipsis;
}

.result-panel__preview {
  width: 100%;
  max-height: 16rem;
  object-fit: contain;
  border-radius: 6px;
  background: var(--void-black);
}

.result-panel__meta {
  font-size: var(--text-xs);
  color: var(--text-secondary);
}

/* === Icon Buttons === */
.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  min-width: 2.5rem;
  padding: 0.5rem 0.75rem;
  border-radius: 6px;
  font-family: var(--font-mono);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.icon-btn--solid {
  background: var(--cyan);
  border: 1px solid var(--cyan);
  color: var(--void-black);
}

.icon-btn--solid:hover {
  box-shadow: 0 0 12px var(--cyan-glow);
}

.icon-btn--ghost {
  background: transparent;
  border: none;
  color: var(--text-muted);
}

.icon-btn--ghost:hover {
  color: var(--text-primary);
}

.copy-btn--done {
  background: var(--moss-glow);
  border-color: var(--moss-glow);
}

/* === Toasts === */
.toaster {
  position: fixed;
  right: 1rem;
  bottom: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  z-index: 100;
  max-width: 22rem;
}

.toast {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
  padding: 0.75rem 1rem;
  border-radius: 8px;
  border: 1px solid var(--void-border);
  background: var(--void-lighter);
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.5);
}

.toast--success {
  border-left: 3px solid var(--moss-glow);
}

.toast--destructive {
  border-color: var(--danger);
  background: var(--danger-wash);
}

.toast__body {
  flex: 1;
}

.toast__title {
  font-size: var(--text-sm);
  font-weight: 600;
}

.toast__description {
  font-size: var(--text-xs);
  color: var(--text-secondary);
}

.close-btn {
  min-width: 0;
  padding: 0 0.25rem;
  font-size: 1.25rem;
  line-height: 1;
}
"#;
