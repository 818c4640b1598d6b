use embassy_stm32::mode::Async;
use embassy_stm32::time::Hertz;
use embassy_stm32::usart::{Config as UsartConfig, Uart};
use embassy_stm32::{bind_interrupts, gpio::Pull, i2c, peripherals, rcc, usart, Config};

use crate::config::{CONSOLE_BAUDRATE, I2C_FREQUENCY_HZ};

// ── IRQ table ─────────────────────────────────────────────
bind_interrupts!(pub struct Irqs {
    USART1 => usart::InterruptHandler<peripherals::USART1>;
    I2C2   => i2c::EventInterruptHandler<peripherals::I2C2>,
              i2c::ErrorInterruptHandler<peripherals::I2C2>;
});

static mut CONSOLE_DMA_BUF: [u8; 256] = [0; 256];

// ── Board struct ──────────────────────────────────────────
pub struct Board {
    pub console_tx: usart::UartTx<'static, Async>,
    pub console_rx: usart::RingBufferedUartRx<'static>,
    pub i2c: i2c::I2c<'static, Async>, // DMA, both sensors
}

impl Board {
    pub fn init() -> Self {
        let mut config = Config::default();

        // Enable HSI and configure PLL for 64MHz
        config.rcc.hsi = Some(rcc::Hsi {
            sys_div: rcc::HsiSysDiv::DIV1,
        });
        config.rcc.pll = Some(rcc::Pll {
            source: rcc::PllSource::HSI,    // Use HSI as PLL source
            prediv: rcc::PllPreDiv::DIV2,   // 16MHz / 2 = 8MHz
            mul: rcc::PllMul::MUL16,        // 8MHz * 16 = 128MHz
            divp: None,                     // Not used
            divq: None,                     // Not used
            divr: Some(rcc::PllRDiv::DIV2), // 128MHz / 2 = 64MHz
        });
        config.rcc.sys = rcc::Sysclk::PLL1_R;
        let p = embassy_stm32::init(config);

        let mut us_cfg = UsartConfig::default();
        us_cfg.baudrate = CONSOLE_BAUDRATE;
        us_cfg.rx_pull = Pull::Up;

        let uart = Uart::new(p.USART1, p.PC5, p.PC4, Irqs, p.DMA1_CH2, p.DMA1_CH3, us_cfg).unwrap();
        let (tx, rx) = uart.split();

        // DMA-circular RX driver
        #[allow(static_mut_refs)]
        let rx = rx.into_ring_buffered(unsafe { &mut CONSOLE_DMA_BUF });

        // I²C2 (DMA CH7 TX, CH6 RX), external pull-ups on the sensor boards
        let mut i2c_cfg = i2c::Config::default();
        i2c_cfg.sda_pullup = false;
        i2c_cfg.scl_pullup = false;

        let i2c = i2c::I2c::new(
            p.I2C2,
            p.PB10,
            p.PB11,
            Irqs,
            p.DMA1_CH7,
            p.DMA1_CH6,
            Hertz(I2C_FREQUENCY_HZ),
            i2c_cfg,
        );

        Self {
            console_tx: tx,
            console_rx: rx,
            i2c,
        }
    }
}
