//! Global CSS styles for the portfolio.
//!
//! Colours come from the `.theme-light` / `.theme-dark` class on each
//! section; reveal and hover motion is keyed off the `is-*` state classes.

pub const GLOBAL_STYLES: &str = r#"
/* === Theme Palettes === */
.theme-light {
  --surface: #ffffff;
  --surface-alt: #f9fafb;
  --card: #ffffff;
  --border: #e5e7eb;
  --text-primary: #111827;
  --text-secondary: #4b5563;
  --text-muted: #6b7280;
  --accent: #2563eb;
  --accent-strong: #1d4ed8;
  --accent-soft: #dbeafe;
  --danger: #dc2626;
}

.theme-dark {
  --surface: #111827;
  --surface-alt: #1f2937;
  --card: #111827;
  --border: #374151;
  --text-primary: #ffffff;
  --text-secondary: #9ca3af;
  --text-muted: #6b7280;
  --accent: #60a5fa;
  --accent-strong: #3b82f6;
  --accent-soft: rgba(30, 58, 138, 0.3);
  --danger: #f87171;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: 'Inter', system-ui, -apple-system, sans-serif;
  line-height: 1.6;
}

.portfolio {
  min-height: 100vh;
  background: var(--surface);
  color: var(--text-primary);
  transition: background 300ms ease, color 300ms ease;
}

.site-header {
  display: flex;
  justify-content: flex-end;
  padding: 1rem 1.5rem;
}

.theme-toggle {
  background: none;
  border: 1px solid var(--border);
  border-radius: 9999px;
  color: var(--text-primary);
  cursor: pointer;
  padding: 0.4rem 0.9rem;
}

/* === Sections === */
.section {
  padding: 5rem 1.5rem;
  background: var(--surface);
  color: var(--text-primary);
  transition: background 300ms ease;
}

.education-section {
  background: var(--surface-alt);
}

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: 4rem;
  animation: title-drop 800ms ease both;
}

.section-subtitle {
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: 1.5rem;
}

@keyframes title-drop {
  from { opacity: 0; transform: translateY(-20px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Staggered Reveal === */
.reveal-item {
  transition: opacity 600ms ease-out, transform 600ms ease-out, box-shadow 300ms ease;
}

.reveal-item.is-hidden {
  opacity: 0;
}

.reveal-rise.is-hidden {
  transform: translateY(50px);
}

.reveal-slide-left.is-hidden {
  transform: translateX(-20px);
}

.reveal-item.is-visible {
  opacity: 1;
  transform: none;
  transition-delay: var(--reveal-delay, 0ms);
}

.reveal-item.is-hovered {
  transition-delay: 0ms;
}

/* === Cards === */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 2rem;
  max-width: 1200px;
  margin: 0 auto;
}

.card-grid--three {
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
}

.credential-card,
.project-card {
  background: var(--card);
  border-radius: 0.75rem;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
  overflow: hidden;
}

.credential-card {
  padding: 1.5rem;
  text-align: center;
}

.credential-card.is-hovered,
.project-card.is-hovered {
  transform: translateY(-10px);
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.15);
}

.card-title {
  font-size: 1.25rem;
  font-weight: 700;
  margin-bottom: 0.5rem;
}

.card-description {
  color: var(--text-muted);
}

.credential-institution {
  color: var(--accent);
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.credential-period {
  color: var(--text-secondary);
  margin-bottom: 1rem;
}

/* === Icons === */
.icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
}

.credential-icon {
  width: 4rem;
  height: 4rem;
  margin: 0 auto 1.5rem;
  border-radius: 9999px;
  background: var(--accent-soft);
  font-size: 2rem;
  transition: transform 800ms ease;
}

.credential-card.is-hovered .credential-icon {
  transform: scale(1.2) rotate(360deg);
}

/* === Projects === */
.project-media {
  position: relative;
  overflow: hidden;
}

.project-image {
  display: block;
  width: 100%;
  height: 12rem;
  object-fit: cover;
  transition: transform 400ms ease;
}

.project-card.is-hovered .project-image {
  transform: scale(1.1);
}

.project-links {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  background: rgba(0, 0, 0, 0.5);
  opacity: 0;
  pointer-events: none;
  transition: opacity 300ms ease;
}

.project-links.revealed {
  opacity: 1;
  pointer-events: auto;
}

.project-link {
  display: inline-flex;
  padding: 0.5rem;
  border-radius: 9999px;
  background: var(--card);
  color: var(--text-primary);
  font-size: 1.5rem;
  text-decoration: none;
  transition: transform 600ms ease;
}

.project-link:hover {
  transform: scale(1.2) rotate(360deg);
}

.project-body {
  padding: 1.5rem;
}

.tech-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-top: 1rem;
}

.tech-tag {
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  background: var(--accent-strong);
  color: #ffffff;
  font-size: 0.875rem;
  transition: transform 150ms ease;
}

.tech-tag:hover {
  transform: scale(1.1);
}

/* === Contact === */
.contact-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
  gap: 3rem;
  max-width: 1100px;
  margin: 0 auto;
}

.contact-row {
  display: flex;
  align-items: center;
  gap: 1rem;
  margin-bottom: 1.5rem;
  color: var(--text-secondary);
}

.contact-row.is-hovered {
  transform: translateX(10px);
  color: var(--accent);
}

.contact-icon {
  width: 3rem;
  height: 3rem;
  border-radius: 0.5rem;
  background: var(--surface-alt);
  color: var(--accent);
  font-size: 1.25rem;
  transition: transform 300ms ease, background 300ms ease;
}

.contact-row.is-hovered .contact-icon {
  transform: scale(1.2);
  background: #1d4ed8;
  color: #000000;
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  animation: form-slide 500ms ease both;
}

@keyframes form-slide {
  from { opacity: 0; transform: translateX(20px); }
  to { opacity: 1; transform: translateX(0); }
}

.input-label {
  display: block;
  font-size: 0.875rem;
  font-weight: 500;
  margin-bottom: 0.5rem;
  color: var(--text-secondary);
}

.input-field {
  width: 100%;
  padding: 0.5rem 1rem;
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  background: var(--surface-alt);
  color: var(--text-primary);
  font: inherit;
  transition: transform 200ms ease, border-color 200ms ease;
}

.input-field:focus {
  outline: none;
  border-color: var(--accent-strong);
  transform: scale(1.02);
}

.textarea {
  min-height: 8rem;
  resize: vertical;
}

.btn-submit,
.btn-primary {
  padding: 0.75rem 1.5rem;
  border: none;
  border-radius: 0.5rem;
  background: #2563eb;
  color: #ffffff;
  font-weight: 600;
  cursor: pointer;
  transition: transform 150ms ease, box-shadow 300ms ease, background 300ms ease;
}

.btn-submit:hover:not(:disabled) {
  transform: scale(1.02);
  box-shadow: 0 0 20px rgba(59, 130, 246, 0.5);
}

.btn-submit:active:not(:disabled) {
  transform: scale(0.98);
}

.btn-submit:disabled {
  opacity: 0.7;
  cursor: progress;
}

.btn-ghost {
  background: none;
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  color: var(--text-primary);
  padding: 0.75rem 1.5rem;
  cursor: pointer;
}

.spinner {
  display: inline-block;
  width: 1rem;
  height: 1rem;
  margin-right: 0.5rem;
  border: 2px solid rgba(255, 255, 255, 0.4);
  border-top-color: #ffffff;
  border-radius: 9999px;
  vertical-align: -0.15rem;
  animation: spin 800ms linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.error-text {
  color: var(--danger);
  font-size: 0.875rem;
}

.failure-banner {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding: 1rem;
  border: 1px solid var(--danger);
  border-radius: 0.5rem;
  color: var(--danger);
}

.failure-actions {
  display: flex;
  gap: 0.75rem;
}

/* === Acknowledgment Overlay === */
.modal-overlay {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(17, 24, 39, 0.75);
  z-index: 50;
}

.acknowledgment-modal {
  position: relative;
  padding: 2rem;
  border-radius: 0.5rem;
  background: var(--card);
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
}

.modal-title {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: 1rem;
  animation: title-drop 500ms ease both;
}

.modal-description {
  color: var(--text-secondary);
  animation: form-slide 500ms ease 200ms both;
}

.close-btn {
  position: absolute;
  top: 0.5rem;
  right: 0.75rem;
  background: none;
  border: none;
  color: var(--text-muted);
  font-size: 1.5rem;
  cursor: pointer;
}
"#;
