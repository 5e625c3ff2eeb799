pub const CHROME_STYLES: &str = r#"
/* Header */
.site-header {
  position: sticky;
  top: 0;
  z-index: 40;
  backdrop-filter: blur(16px);
}

.nav-container {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-links {
  align-items: center;
  gap: 32px;
}

.nav-preview-trigger {
  position: relative;
  padding: 12px 0;
}

.modules-preview {
  position: absolute;
  top: 100%;
  left: -24px;
  width: 420px;
  display: grid;
  gap: 8px;
  padding: 16px;
  z-index: 50;
}

.module-preview-item {
  display: flex;
  gap: 12px;
  align-items: flex-start;
  padding: 10px;
  border-radius: var(--layout-radius-sm);
  transition: background-color var(--motion-fast) var(--motion-easing);
}

.module-preview-item:hover {
  background-color: var(--color-accent-subtle);
}

/* Mobile menu toggle */
.nav-toggle {
  width: 44px;
  height: 44px;
  display: grid;
  place-items: center;
  background: transparent;
  cursor: pointer;
}

.nav-toggle-bar {
  display: block;
  height: 2px;
  width: 20px;
  border-radius: 999px;
  background-color: var(--color-text-primary);
  transition: transform var(--motion-normal) var(--motion-easing),
              opacity var(--motion-normal) var(--motion-easing);
}

.nav-toggle-bar.open-top {
  transform: translateY(8px) rotate(45deg);
}

.nav-toggle-bar.open-middle {
  opacity: 0;
}

.nav-toggle-bar.open-bottom {
  transform: translateY(-8px) rotate(-45deg);
}

.mobile-menu .mobile-links {
  display: flex;
  flex-direction: column;
  gap: 16px;
  padding: 24px 0;
}

.mobile-menu summary {
  cursor: pointer;
}

/* Footer */
.footer-grid {
  display: grid;
  gap: 48px;
}

@media (min-width: 768px) {
  .footer-grid {
    grid-template-columns: 2fr 1fr 1fr 1fr;
  }
}

.footer-bottom {
  display: flex;
  flex-direction: column;
  gap: 24px;
  margin-top: 64px;
  padding-top: 24px;
  border-top: 1px solid rgba(255, 255, 255, 0.1);
}

@media (min-width: 768px) {
  .footer-bottom {
    flex-direction: row;
    align-items: center;
    justify-content: space-between;
  }
}

.social-links {
  display: flex;
  gap: 16px;
}

.social-link {
  width: 42px;
  height: 42px;
  border-radius: 50%;
  display: grid;
  place-items: center;
  background: rgba(255, 255, 255, 0.08);
}
"#;
