//! Quimikey - Interactive Periodic Table Panel Firmware
//!
//! Main firmware binary for RP2350B-based periodic table panels.
//! A 9x18 keypad mirrors the table; pressing a cell (or steering to it with
//! the joystick) shows the element on a character LCD, lights its family
//! color on the LED strip and reports it to a host over serial.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::peripherals::{PIO0, UART0};
use embassy_rp::pio::Pio;
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use quimikey_drivers::lcd::{Hd44780, LcdDisplay};
use quimikey_drivers::leds::FamilyLeds;

use crate::sinks::PanelDisplay;
use crate::tasks::PanelInputs;

mod channels;
mod config;
mod sinks;
mod tasks;

/// Boot ROM image definition
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Quimikey firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();

    // Keypad matrix: rows GPIO0-8 driven, columns GPIO9-26 sensed
    let rows = [
        Output::new(p.PIN_0, Level::High),
        Output::new(p.PIN_1, Level::High),
        Output::new(p.PIN_2, Level::High),
        Output::new(p.PIN_3, Level::High),
        Output::new(p.PIN_4, Level::High),
        Output::new(p.PIN_5, Level::High),
        Output::new(p.PIN_6, Level::High),
        Output::new(p.PIN_7, Level::High),
        Output::new(p.PIN_8, Level::High),
    ];
    let cols = [
        Input::new(p.PIN_9, Pull::Up),
        Input::new(p.PIN_10, Pull::Up),
        Input::new(p.PIN_11, Pull::Up),
        Input::new(p.PIN_12, Pull::Up),
        Input::new(p.PIN_13, Pull::Up),
        Input::new(p.PIN_14, Pull::Up),
        Input::new(p.PIN_15, Pull::Up),
        Input::new(p.PIN_16, Pull::Up),
        Input::new(p.PIN_17, Pull::Up),
        Input::new(p.PIN_18, Pull::Up),
        Input::new(p.PIN_19, Pull::Up),
        Input::new(p.PIN_20, Pull::Up),
        Input::new(p.PIN_21, Pull::Up),
        Input::new(p.PIN_22, Pull::Up),
        Input::new(p.PIN_23, Pull::Up),
        Input::new(p.PIN_24, Pull::Up),
        Input::new(p.PIN_25, Pull::Up),
        Input::new(p.PIN_26, Pull::Up),
    ];

    // Push buttons, active low
    let toggle = Input::new(p.PIN_30, Pull::Up);
    let confirm = Input::new(p.PIN_31, Pull::Up);

    // Joystick on ADC0/ADC1 (GPIO40/41 on RP2350B)
    let adc = Adc::new(p.ADC, Irqs, embassy_rp::adc::Config::default());
    let stick_x = Channel::new_pin(p.PIN_40, Pull::None);
    let stick_y = Channel::new_pin(p.PIN_41, Pull::None);

    info!("Inputs initialized");

    // LCD on I2C0 (SDA=GPIO32, SCL=GPIO33)
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_33, p.PIN_32, I2cConfig::default());
    let mut lcd = LcdDisplay::new(Hd44780::new(i2c, Delay, &config.lcd));
    if let Err(e) = lcd.init() {
        error!("LCD init failed: {:?}", e);
        panic!("LCD not responding at {=u8:#x}", config.lcd.address);
    }

    info!("LCD initialized");

    // LED strip on PIO0, one pixel per cell
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let strip = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_34, &program);

    info!("LED strip initialized");

    // Host link on UART0 (TX=GPIO28, RX=GPIO29)
    let uart_config = {
        let mut cfg = UartConfig::default();
        cfg.baudrate = config.baudrate;
        cfg
    };

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_28, p.PIN_29, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized at {} baud", config.baudrate);

    let inputs = PanelInputs {
        rows,
        cols,
        adc,
        stick_x,
        stick_y,
        toggle,
        confirm,
    };

    // Spawn tasks
    spawner.spawn(tasks::serial_rx_task(rx)).unwrap();
    spawner.spawn(tasks::serial_tx_task(tx)).unwrap();
    spawner
        .spawn(tasks::led_task(strip, FamilyLeds::default()))
        .unwrap();
    spawner
        .spawn(tasks::panel_task(inputs, PanelDisplay::new(lcd), config))
        .unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
