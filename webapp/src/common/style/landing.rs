pub const LANDING_STYLES: &str = r#"
/* Cards */
.module-card {
  display: flex;
  flex-direction: column;
  gap: 18px;
  padding: 24px;
  transition: transform var(--motion-normal) var(--motion-easing),
              box-shadow var(--motion-normal) var(--motion-easing);
}

.module-card:hover {
  transform: translateY(-4px);
}

.module-card .learn-more {
  margin-top: auto;
}

.module-capabilities {
  display: grid;
  gap: 8px;
}

.module-capabilities li::before {
  content: "✓";
  margin-right: 8px;
  color: var(--color-accent-primary);
}

.support-card {
  display: flex;
  flex-direction: column;
  gap: 18px;
}

.support-card a {
  margin-top: auto;
}

/* Hero */
.hero-badge {
  display: inline-flex;
  align-items: center;
  gap: 12px;
  text-transform: uppercase;
}

.hero-illustration {
  position: relative;
  overflow: hidden;
}

.hero-illustration .frame {
  position: absolute;
  inset: 12%;
  border-radius: 24px;
  transform: rotate(3deg);
}

/* About */
.about-illustration {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 320px;
}

.about-illustration .frame {
  position: absolute;
}

.chip-grid {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 80px));
  gap: 14px;
}

/* Pricing */
.pricing-card {
  margin: 0 auto;
  max-width: 560px;
  padding: 40px;
}

.pricing-inclusions li {
  display: flex;
  gap: 12px;
  align-items: flex-start;
}

.centered {
  text-align: center;
  max-width: 42rem;
  margin: 0 auto;
}
"#;
